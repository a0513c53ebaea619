//! Construction and display of service errors.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn rejected_question() -> Error {
    Error::unprocessable("question is invalid").with_details(json!({
        "violations": [{ "field": "answer", "code": "missing_field" }]
    }))
}

#[rstest]
#[case(Error::invalid_request("bad page"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::unprocessable("rejected"), ErrorCode::Unprocessable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
    assert!(error.details().is_none());
}

#[rstest]
#[case(ErrorCode::NotFound, "not_found")]
#[case(ErrorCode::InternalError, "internal_error")]
fn blank_messages_fall_back_to_the_code(#[case] code: ErrorCode, #[case] expected: &str) {
    assert_eq!(Error::new(code, " \t").message(), expected);
}

#[rstest]
fn display_uses_message(rejected_question: Error) {
    assert_eq!(rejected_question.to_string(), "question is invalid");
}

#[rstest]
fn details_survive_cloning(rejected_question: Error) {
    let copy = rejected_question.clone();
    assert_eq!(
        copy.details().and_then(|d| d.pointer("/violations/0/field")),
        Some(&json!("answer"))
    );
    assert_eq!(copy, rejected_question);
}
