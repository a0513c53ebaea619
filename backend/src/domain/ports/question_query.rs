//! Driving port for read-side question use cases.
//!
//! Inbound adapters call this port with already-parsed request values and
//! receive domain results; response shaping stays in the adapter.

use std::collections::HashSet;

use async_trait::async_trait;
use pagination::PageNumber;

use crate::domain::{Category, CategoryId, Error, Question, QuestionId, QuizDraw};

/// One page of questions plus the count the endpoint reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Paginated listing of the whole bank with the category map attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
}

/// Search input: the term is matched case-insensitively against question text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuestionsRequest {
    pub term: String,
    pub page: PageNumber,
}

/// Questions-by-category input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryQuestionsRequest {
    pub category: CategoryId,
    pub page: PageNumber,
}

/// Quiz input as supplied by the player each round.
///
/// `quiz_category` is kept raw: `None` means the client omitted it, which is
/// rejected, while `Some(0)` selects every category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayQuizRequest {
    pub previous_questions: HashSet<QuestionId>,
    pub quiz_category: Option<i64>,
}

/// Domain use-case port for question reads and quiz play.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionQuery: Send + Sync {
    /// All categories ordered by identifier.
    async fn list_categories(&self) -> Result<Vec<Category>, Error>;

    /// A page of the full bank.
    async fn list_questions(&self, page: PageNumber) -> Result<QuestionListing, Error>;

    /// A page of questions matching a search term.
    async fn search_questions(
        &self,
        request: SearchQuestionsRequest,
    ) -> Result<QuestionPage, Error>;

    /// A page of questions in one category.
    async fn questions_by_category(
        &self,
        request: CategoryQuestionsRequest,
    ) -> Result<QuestionPage, Error>;

    /// Draw the next unseen quiz question.
    async fn play_quiz(&self, request: PlayQuizRequest) -> Result<QuizDraw, Error>;
}
