//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`QuestionRepository`, `CategoryRepository`) are implemented
//! by outbound adapters. Driving ports (`QuestionQuery`, `QuestionCommand`)
//! are implemented by [`crate::domain::QuestionService`] and consumed by the
//! HTTP adapter.

mod macros;
pub(crate) use macros::define_port_error;

mod category_repository;
mod question_command;
mod question_query;
mod question_repository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use question_command::MockQuestionCommand;
pub use question_command::{AddQuestionRequest, FieldViolation, QuestionCommand};
#[cfg(test)]
pub use question_query::MockQuestionQuery;
pub use question_query::{
    CategoryQuestionsRequest, PlayQuizRequest, QuestionListing, QuestionPage, QuestionQuery,
    SearchQuestionsRequest,
};
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::{QuestionRepository, QuestionRepositoryError};

#[cfg(test)]
mod tests;
