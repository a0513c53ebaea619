//! Driving port for question mutations and the add-question validation pass.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{
    AnswerText, CategoryId, Difficulty, Error, NewQuestion, Question, QuestionId, QuestionText,
    QuestionValidationError,
};

/// Raw add-question input; every field is optional until validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

/// One reason a request field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub code: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn missing(field: &'static str) -> Self {
        Self {
            field,
            code: "missing_field",
            message: format!("missing required field: {field}"),
        }
    }

    fn invalid(field: &'static str, error: &QuestionValidationError) -> Self {
        Self {
            field,
            code: error.code(),
            message: error.to_string(),
        }
    }
}

fn check<T, F>(
    field: &'static str,
    value: Option<T>,
    violations: &mut Vec<FieldViolation>,
    parse: impl FnOnce(T) -> Result<F, QuestionValidationError>,
) -> Option<F> {
    let Some(raw) = value else {
        violations.push(FieldViolation::missing(field));
        return None;
    };
    parse(raw)
        .map_err(|err| violations.push(FieldViolation::invalid(field, &err)))
        .ok()
}

impl AddQuestionRequest {
    /// Check every field, collecting all violations instead of stopping at
    /// the first.
    pub fn validate(self) -> Result<NewQuestion, Vec<FieldViolation>> {
        let mut violations = Vec::new();
        let question = check("question", self.question, &mut violations, QuestionText::new);
        let answer = check("answer", self.answer, &mut violations, AnswerText::new);
        let difficulty = check("difficulty", self.difficulty, &mut violations, Difficulty::new);
        let category = check(
            "category",
            self.category,
            &mut violations,
            CategoryId::for_question,
        );

        match (question, answer, difficulty, category) {
            (Some(question), Some(answer), Some(difficulty), Some(category))
                if violations.is_empty() =>
            {
                Ok(NewQuestion {
                    question,
                    answer,
                    difficulty,
                    category,
                })
            }
            _ => Err(violations),
        }
    }
}

/// Domain use-case port for question mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionCommand: Send + Sync {
    /// Validate and store a new question.
    async fn add_question(&self, request: AddQuestionRequest) -> Result<Question, Error>;

    /// Delete a question, returning the identifier that was removed.
    async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, Error>;
}
