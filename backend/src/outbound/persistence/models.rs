//! Internal Diesel row structs.
//!
//! Rows are converted to domain types at the adapter boundary and never
//! leave the persistence module.

use diesel::prelude::*;

use crate::domain::{
    AnswerText, Category, CategoryId, Difficulty, NewQuestion, Question, QuestionId,
    QuestionText, QuestionValidationError,
};

use super::schema::{categories, questions};

/// Row read from the `questions` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct QuestionRow {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

impl TryFrom<QuestionRow> for Question {
    type Error = QuestionValidationError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: QuestionId::new(row.id),
            question: QuestionText::new(row.question)?,
            answer: AnswerText::new(row.answer)?,
            difficulty: Difficulty::new(i64::from(row.difficulty))?,
            category: CategoryId::new(row.category),
        })
    }
}

/// Insertable row for new questions; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub(crate) struct NewQuestionRow<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub difficulty: i32,
    pub category: i32,
}

impl<'a> From<&'a NewQuestion> for NewQuestionRow<'a> {
    fn from(draft: &'a NewQuestion) -> Self {
        Self {
            question: draft.question.as_ref(),
            answer: draft.answer.as_ref(),
            difficulty: i32::from(draft.difficulty.get()),
            category: draft.category.get(),
        }
    }
}

/// Row read from the `categories` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i32,
    pub kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::new(row.id),
            kind: row.kind,
        }
    }
}
