//! The JSON error body and its headers for errors the gateway raises itself.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse, ResponseError};
use gateway::error::{AppError, INTERNAL_MESSAGE, UNAVAILABLE_MESSAGE};
use gateway::errors::ErrorCode;
use gateway::middleware::RequestTrace;
use gateway::test_support::{create_test_app, test_state, StubTransport};
use gateway_test_support::error_body::assert_error_body_from_http_response;

use crate::common::assert_error;

async fn fail(error: AppError) -> Result<HttpResponse, AppError> {
    Err(error)
}

#[actix_web::test]
async fn test_status_specific_headers() {
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .route("/unauthorized", web::get().to(|| fail(AppError::unauthorized())))
            .route(
                "/unavailable",
                web::get().to(|| fail(AppError::backend_unavailable("tenant down"))),
            )
            .route(
                "/invalid",
                web::get().to(|| fail(AppError::invalid(ErrorCode::ValidationError, "name is required"))),
            ),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/unauthorized").to_request()).await;
    assert_eq!(resp.headers().get("WWW-Authenticate").unwrap(), "Bearer");
    assert!(resp.headers().get("Retry-After").is_none());
    assert_error(resp, 401, "UNAUTHORIZED").await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/unavailable").to_request()).await;
    assert!(resp.headers().get("Retry-After").is_some());
    assert!(resp.headers().get("WWW-Authenticate").is_none());
    let body = assert_error(resp, 503, "BACKEND_UNAVAILABLE").await;
    assert_eq!(body.error, UNAVAILABLE_MESSAGE);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/invalid").to_request()).await;
    assert!(resp.headers().get("Retry-After").is_none());
    assert!(resp.headers().get("WWW-Authenticate").is_none());
    let body = assert_error(resp, 400, "VALIDATION_ERROR").await;
    assert_eq!(body.error, "name is required");
}

#[actix_web::test]
async fn test_internal_detail_never_reaches_client() {
    let app = test::init_service(App::new().wrap(RequestTrace).route(
        "/boom",
        web::get().to(|| fail(AppError::internal("tenant said: secret-db-host:5432 down"))),
    ))
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/boom").to_request()).await;
    let body = assert_error(resp, 500, "INTERNAL").await;
    assert_eq!(body.error, INTERNAL_MESSAGE);
}

#[actix_web::test]
async fn test_malformed_json_body_is_400() {
    let stub = Arc::new(StubTransport::new());
    let app = create_test_app(test_state(stub.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name": "Ada", "email": }"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body = assert_error(resp, 400, "BAD_REQUEST").await;
    assert!(body.error.starts_with("Invalid JSON"));
    assert!(stub.calls().is_empty());
}

#[actix_web::test]
async fn test_oversized_body_is_400() {
    let stub = Arc::new(StubTransport::new());
    let mut state = test_state(stub.clone());
    let mut config = (*state.config).clone();
    config.max_json_payload_size = 32;
    state.config = Arc::new(config);
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_payload(format!(
            r#"{{"name":"Ada","email":"ada@example.com","message":"{}"}}"#,
            "x".repeat(64)
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error(resp, 400, "BAD_REQUEST").await;
    assert!(stub.calls().is_empty());
}

#[actix_web::test]
async fn test_error_rendered_outside_a_request_scope() {
    let resp = AppError::invalid(ErrorCode::InvalidEmail, "A valid email address is required")
        .error_response();

    let body =
        assert_error_body_from_http_response(resp, StatusCode::BAD_REQUEST, "INVALID_EMAIL").await;
    assert_eq!(body.trace_id, "unknown");
    assert_eq!(body.error, "A valid email address is required");
}
