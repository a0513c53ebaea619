//! HTTP adapter mapping for domain errors.
//!
//! Every failure leaves the service as the same JSON envelope:
//! `{"success": false, "error": <status>, "message": <fixed text>}`. The
//! domain message is diagnostic and only logged. Validation details are
//! attached as `details`, except on internal errors. Inside a traced request
//! the envelope also carries the `trace_id` echoed in the `trace-id` header.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false`.
    pub success: bool,
    /// HTTP status code, repeated in the body.
    #[schema(example = 404)]
    pub error: u16,
    /// Fixed human-readable text for the status.
    #[schema(example = "Sorry not found")]
    pub message: String,
    /// Structured validation details, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Identifier of the failed request, matching the `trace-id` header.
    #[schema(example = "4f1c8a3e-92b0-4d7e-a1c5-0b9e6d2f7a10")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Public message for a status; clients match on these strings.
pub fn public_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request",
        StatusCode::NOT_FOUND => "Sorry not found",
        StatusCode::UNPROCESSABLE_ENTITY => "This is unprocessable",
        _ => "The server does not know how to handle this",
    }
}

impl ErrorEnvelope {
    fn from_error(error: &Error) -> Self {
        let status = status_for(error.code());
        let details = match error.code() {
            ErrorCode::InternalError => None,
            _ => error.details().cloned(),
        };
        Self {
            success: false,
            error: status.as_u16(),
            message: public_message(status).to_owned(),
            details,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = %self.code(), reason = self.message(), "request failed");
        } else {
            warn!(code = %self.code(), reason = self.message(), "request rejected");
        }
        HttpResponse::build(status).json(ErrorEnvelope::from_error(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("unexpected framework error")
    }
}

/// Malformed JSON bodies are unprocessable.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    Error::unprocessable(format!("malformed JSON body: {err}")).into()
}

/// Path segments that do not parse name no resource.
pub fn path_error_handler(
    err: actix_web::error::PathError,
    _req: &HttpRequest,
) -> actix_web::Error {
    Error::not_found(format!("unrecognised path parameter: {err}")).into()
}

/// Query strings that do not parse are bad requests.
pub fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    Error::invalid_request(format!("malformed query string: {err}")).into()
}

#[cfg(test)]
mod tests;
