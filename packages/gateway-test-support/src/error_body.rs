//! Assertions for the gateway's error contract:
//! `{ "error", "code", "status", "trace_id" }` plus a matching `x-trace-id`
//! header.

use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the gateway's error body.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub error: String,
    pub code: String,
    pub status: u16,
    pub trace_id: String,
}

/// Assert that response parts carry a well-formed gateway error and return
/// the parsed body for further checks.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status, "unexpected HTTP status");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );

    let header_trace_id = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8")
        .to_string();
    assert!(!header_trace_id.is_empty(), "x-trace-id should not be empty");

    let raw = String::from_utf8_lossy(body);
    let parsed: ErrorBodyLike = serde_json::from_slice(body)
        .unwrap_or_else(|e| panic!("error body did not parse ({e}): {raw}"));

    assert_eq!(parsed.code, expected_code, "unexpected error code");
    assert_eq!(parsed.status, expected_status.as_u16());
    assert!(!parsed.error.is_empty(), "error message should not be empty");
    assert_eq!(
        parsed.trace_id, header_trace_id,
        "trace_id in body should match x-trace-id header"
    );
    parsed
}

/// [`assert_error_body_from_parts`] over an `HttpResponse`.
pub async fn assert_error_body_from_http_response(
    resp: actix_web::HttpResponse,
    expected_status: StatusCode,
    expected_code: &str,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::body::to_bytes(resp.into_body())
        .await
        .unwrap_or_else(|_| panic!("failed to read error body"));
    assert_error_body_from_parts(status, &headers, &body, expected_status, expected_code)
}
