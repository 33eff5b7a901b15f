//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("Planet not found"), StatusCode::NOT_FOUND)]
#[case(Error::computation_fault("radius is zero"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn response_parts(error: Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("Trace-Id not valid UTF-8").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds");
    (status, header, body)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("planet store lock poisoned")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let (status, header, body) = response_parts(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(body["message"], "Internal server error");
    assert!(body.get("details").is_none());
}

#[rstest]
#[actix_web::test]
async fn not_found_errors_expose_message_and_details(expected_trace_id: String) {
    let error = Error::not_found("Planet not found")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"id": 7}));

    let (status, header, body) = response_parts(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "Planet not found");
    assert_eq!(body["details"]["id"], 7);
    assert_eq!(body["traceId"], expected_trace_id.as_str());
}

#[rstest]
#[actix_web::test]
async fn errors_without_trace_omit_header() {
    let (_, header, body) = response_parts(Error::invalid_request("bad")).await;

    assert!(header.is_none());
    assert!(body.get("traceId").is_none());
}
