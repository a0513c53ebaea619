//! Domain primitives, use cases, and ports.
//!
//! Purpose: define the trivia question bank independently of HTTP and of the
//! backing store. Adapters talk to the domain only through [`ports`].
//!
//! Public surface:
//! - `Error` and `ErrorCode`: classified service failures.
//! - `Question`, `Category`, and their field newtypes.
//! - `QuizSampler`: uniform draw of an unseen question.
//! - `QuestionService`: implements the driving ports.

pub mod error;
pub mod filters;
pub mod ports;
pub mod question;
pub mod question_service;
pub mod quiz;

pub use self::error::{Error, ErrorCode};
pub use self::filters::{filter_by_category, search_by_text};
pub use self::question::{
    AnswerText, Category, CategoryId, CategorySelector, DIFFICULTY_MAX, DIFFICULTY_MIN,
    Difficulty, NewQuestion, Question, QuestionId, QuestionText, QuestionValidationError,
};
pub use self::question_service::QuestionService;
pub use self::quiz::{QuizDraw, QuizSampler};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
