//! HTTP inbound adapter exposing the question bank endpoints.

pub mod categories;
pub mod dto;
pub mod error;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::{HttpResponse, guard, web};

use crate::domain::Error;

pub use error::ApiResult;

/// Register every question bank route and the extractor error policy.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(categories::list_categories)
        .service(categories::questions_by_category)
        .service(questions::list_questions)
        .service(questions::delete_question)
        .service(questions::add_question)
        .service(questions::search_questions)
        .service(quizzes::play_quiz)
        .service(
            web::resource("/{tail:.*}")
                .guard(guard::Options())
                .to(preflight),
        );
}

/// Answer CORS preflight requests; the CORS headers are added by middleware.
pub async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Fallback for unmatched routes, rendered with the error envelope.
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found("no route matches the request"))
}
