//! Quiz play endpoint.
//!
//! ```text
//! POST /quizzes
//! ```

use actix_web::{HttpResponse, post, web};

use crate::domain::ports::PlayQuizRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{QuizBody, QuizResponse};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// Draw a random question the player has not seen yet.
///
/// Once every question in the pool has been seen the response carries
/// `"question": false` and is still a success.
#[utoipa::path(
    post,
    path = "/quizzes",
    tags = ["quizzes"],
    request_body = QuizBody,
    responses(
        (status = 200, description = "Next question, or false when exhausted", body = QuizResponse),
        (status = 404, description = "Quiz pool could not be loaded", body = ErrorEnvelope),
        (status = 422, description = "Missing quiz category or malformed body", body = ErrorEnvelope)
    )
)]
#[post("/quizzes")]
pub async fn play_quiz(
    state: web::Data<HttpState>,
    payload: web::Json<QuizBody>,
) -> ApiResult<HttpResponse> {
    let draw = state
        .questions
        .play_quiz(PlayQuizRequest::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(QuizResponse::from(draw)))
}
