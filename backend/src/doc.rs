//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every question bank endpoint, the health probes, and
//! the request and response bodies. The document backs Swagger UI in debug
//! builds and is exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::dto::{
    AddQuestionBody, CategoriesResponse, CreatedResponse, DeletedResponse, LenientInt,
    QuestionListResponse, QuestionPageResponse, QuestionView, QuizBody, QuizCategoryBody,
    QuizQuestion, QuizResponse, SearchBody,
};
use crate::inbound::http::error::ErrorEnvelope;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia backend API",
        description = "Question bank listing, search, editing, and quiz play."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::questions_by_category,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::questions::add_question,
        crate::inbound::http::questions::search_questions,
        crate::inbound::http::quizzes::play_quiz,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorEnvelope,
        QuestionView,
        CategoriesResponse,
        QuestionListResponse,
        QuestionPageResponse,
        DeletedResponse,
        CreatedResponse,
        QuizResponse,
        QuizQuestion,
        AddQuestionBody,
        SearchBody,
        QuizBody,
        QuizCategoryBody,
        LenientInt,
    )),
    tags(
        (name = "categories", description = "Category listing and browsing"),
        (name = "questions", description = "Question listing, search, and editing"),
        (name = "quizzes", description = "Quiz play"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
