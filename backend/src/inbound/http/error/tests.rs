//! Tests for HTTP error mapping.

use super::*;
use crate::middleware::Trace;
use crate::middleware::trace::TRACE_ID_HEADER;
use actix_web::body::to_bytes;
use actix_web::test as actix_test;
use actix_web::{App, web};
use rstest::rstest;
use serde_json::json;

async fn envelope_of(error: Error) -> (StatusCode, ErrorEnvelope) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let envelope = serde_json::from_slice(&bytes).expect("envelope deserialises");
    (status, envelope)
}

#[rstest]
#[case(Error::invalid_request("page 0"), 400, "Bad request")]
#[case(Error::not_found("no rows"), 404, "Sorry not found")]
#[case(Error::unprocessable("missing answer"), 422, "This is unprocessable")]
#[case(
    Error::internal("pool exhausted"),
    500,
    "The server does not know how to handle this"
)]
#[actix_web::test]
async fn envelope_uses_fixed_messages(
    #[case] error: Error,
    #[case] status: u16,
    #[case] message: &str,
) {
    let (actual, envelope) = envelope_of(error).await;
    assert_eq!(actual.as_u16(), status);
    assert_eq!(
        envelope,
        ErrorEnvelope {
            success: false,
            error: status,
            message: message.to_owned(),
            details: None,
            trace_id: None,
        }
    );
}

#[rstest]
#[actix_web::test]
async fn validation_details_are_forwarded() {
    let details = json!({ "violations": [{ "field": "difficulty" }] });
    let (_, envelope) = envelope_of(Error::unprocessable("bad").with_details(details.clone())).await;
    assert_eq!(envelope.details, Some(details));
}

#[rstest]
#[actix_web::test]
async fn internal_details_are_never_sent() {
    let error = Error::internal("boom").with_details(json!({ "dsn": "postgres://secret" }));
    let response = ResponseError::error_response(&error);
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let body = std::str::from_utf8(&bytes).expect("utf8");
    assert!(!body.contains("secret"));
    assert!(!body.contains("boom"));
}

#[rstest]
#[actix_web::test]
async fn envelope_carries_the_scoped_trace_id() {
    let id: TraceId = "4f1c8a3e-92b0-4d7e-a1c5-0b9e6d2f7a10"
        .parse()
        .expect("valid trace id");
    let (_, envelope) = TraceId::scope(id, envelope_of(Error::not_found("no rows"))).await;
    assert_eq!(envelope.trace_id.as_deref(), Some(id.to_string().as_str()));
}

async fn missing_question() -> ApiResult<HttpResponse> {
    Err(Error::not_found("question 7 does not exist"))
}

#[rstest]
#[actix_web::test]
async fn traced_error_body_matches_header() {
    let app = actix_test::init_service(
        App::new()
            .wrap(Trace)
            .route("/questions/7", web::delete().to(missing_question)),
    )
    .await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/questions/7").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("header is ascii")
        .to_owned();
    let envelope: ErrorEnvelope = actix_test::read_body_json(response).await;
    assert_eq!(envelope.trace_id, Some(header));
    assert_eq!(envelope.message, "Sorry not found");
}

#[rstest]
fn actix_errors_become_internal() {
    let actix = actix_web::error::ErrorBadGateway("upstream");
    assert_eq!(Error::from(actix).code(), ErrorCode::InternalError);
}
