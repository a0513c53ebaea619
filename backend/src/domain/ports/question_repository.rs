//! Driven port for question storage.
//!
//! The store owns question lifetime. Every read returns questions ordered by
//! identifier ascending so pagination over the results is stable.

use async_trait::async_trait;

use crate::domain::{CategoryId, NewQuestion, Question, QuestionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by question store adapters.
    pub enum QuestionRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "question store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "question store query failed: {message}",
        /// A write violated a store constraint (for example an unknown
        /// category reference).
        Constraint { message: String } =>
            "question store rejected the write: {message}",
    }
}

/// Port for reading and mutating stored questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Every stored question.
    async fn all(&self) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Number of stored questions.
    async fn count(&self) -> Result<usize, QuestionRepositoryError>;

    /// Fetch a question by identifier.
    async fn get(&self, id: QuestionId) -> Result<Option<Question>, QuestionRepositoryError>;

    /// Persist a new question, returning it with its assigned identifier.
    async fn insert(&self, question: NewQuestion) -> Result<Question, QuestionRepositoryError>;

    /// Delete a question; `false` when no row matched.
    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError>;

    /// Questions whose text contains `term`, case-insensitively.
    async fn find_by_text_substring(
        &self,
        term: &str,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Questions filed under `category`.
    async fn find_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;
}
