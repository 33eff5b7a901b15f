//! Tests for domain error construction and serialisation.

use super::*;
use crate::domain::TraceId;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("Planet not found"), ErrorCode::NotFound)]
#[case(Error::computation_fault("radius is zero"), ErrorCode::ComputationFault)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn new_substitutes_blank_messages() {
    let error = Error::new(ErrorCode::NotFound, "");
    assert_eq!(error.message(), "not found");
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::not_found("Planet not found") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[tokio::test]
async fn try_from_error_dto_clears_ambient_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let dto = ErrorDto {
        code: ErrorCode::InvalidRequest,
        message: "bad".to_owned(),
        trace_id: None,
        details: None,
    };

    let error = TraceId::scope(trace_id, async move {
        Error::try_from(dto).expect("conversion succeeds for valid payload without trace")
    })
    .await;

    assert!(error.trace_id().is_none());
}

#[rstest]
fn serialises_to_camel_case_envelope() {
    let error = Error::computation_fault("planet radius must be non-zero")
        .with_trace_id("abc")
        .with_details(json!({"field": "radius"}));

    let value = serde_json::to_value(&error).expect("error serialises");
    assert_eq!(value["code"], "computation_fault");
    assert_eq!(value["message"], "planet radius must be non-zero");
    assert_eq!(value["traceId"], "abc");
    assert_eq!(value["details"]["field"], "radius");
}

#[rstest]
fn deserialisation_rejects_blank_trace_id() {
    let payload = json!({"code": "not_found", "message": "missing", "traceId": "  "});
    let result = serde_json::from_value::<Error>(payload);
    assert!(result.is_err());
}

#[rstest]
fn deserialisation_accepts_snake_case_trace_alias() {
    let payload = json!({"code": "not_found", "message": "missing", "trace_id": "abc"});
    let error: Error = serde_json::from_value(payload).expect("alias accepted");
    assert_eq!(error.trace_id(), Some("abc"));
}
