//! Pure filters over borrowed question sequences.
//!
//! Both filters keep the input order, so results stay sorted by identifier
//! when the store returns them that way.

use crate::domain::{CategoryId, Question};

/// Questions whose text contains `term`, ignoring case.
///
/// An empty term matches every question.
pub fn search_by_text(term: &str, items: &[Question]) -> Vec<Question> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|question| question.question.as_ref().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Questions filed under exactly `category`.
pub fn filter_by_category(category: CategoryId, items: &[Question]) -> Vec<Question> {
    items
        .iter()
        .filter(|question| question.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnswerText, Difficulty, QuestionId, QuestionText};
    use rstest::{fixture, rstest};

    fn question(id: i32, text: &str, category: i32) -> Question {
        Question {
            id: QuestionId::new(id),
            question: QuestionText::new(text).expect("question text"),
            answer: AnswerText::new("answer").expect("answer text"),
            difficulty: Difficulty::new(1).expect("difficulty"),
            category: CategoryId::new(category),
        }
    }

    #[fixture]
    fn bank() -> Vec<Question> {
        vec![
            question(1, "What is the largest cat species?", 1),
            question(2, "Which Catalan architect designed the Sagrada Familia?", 2),
            question(3, "What is the capital of Peru?", 3),
            question(4, "Which planet is known as the Red Planet?", 1),
        ]
    }

    fn ids(items: &[Question]) -> Vec<i32> {
        items.iter().map(|q| q.id.get()).collect()
    }

    #[rstest]
    fn search_matches_substrings_in_order(bank: Vec<Question>) {
        assert_eq!(ids(&search_by_text("cat", &bank)), vec![1, 2]);
    }

    #[rstest]
    #[case("cat")]
    #[case("CAT")]
    #[case("Cat")]
    fn search_ignores_case(bank: Vec<Question>, #[case] term: &str) {
        assert_eq!(ids(&search_by_text(term, &bank)), vec![1, 2]);
    }

    #[rstest]
    fn empty_term_matches_everything(bank: Vec<Question>) {
        assert_eq!(ids(&search_by_text("", &bank)), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn search_without_hits_is_empty(bank: Vec<Question>) {
        assert!(search_by_text("zebra", &bank).is_empty());
    }

    #[rstest]
    fn category_filter_is_exact(bank: Vec<Question>) {
        assert_eq!(ids(&filter_by_category(CategoryId::new(1), &bank)), vec![1, 4]);
        assert!(filter_by_category(CategoryId::new(6), &bank).is_empty());
    }
}
