#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use gateway_test_support::error_body::{assert_error_body_from_parts, ErrorBodyLike};
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    gateway_test_support::logging::init();
}

/// Read a response body as JSON, panicking with the raw text on failure.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "body is not JSON ({e}): {}",
            String::from_utf8_lossy(&body)
        )
    })
}

/// Assert the gateway error contract on a service response.
pub async fn assert_error(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;
    let expected = StatusCode::from_u16(expected_status).expect("valid status");
    assert_error_body_from_parts(status, &headers, &body, expected, expected_code)
}
