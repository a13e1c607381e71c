//! `HttpBackend` against a throwaway local server and a closed port.

use std::time::Duration;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use gateway::backend::{
    BackendError, BackendPayload, BackendRequest, BackendTransport, HttpBackend,
};
use serde_json::{json, Value};

fn header(req: &HttpRequest, name: &str) -> Value {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| Value::String(v.to_string()))
        .unwrap_or(Value::Null)
}

async fn echo_headers(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "authorization": header(&req, "authorization"),
        "content_type": header(&req, "content-type"),
        "organization": header(&req, "x-organization-id"),
        "query": req.query_string(),
    }))
}

async fn create_contact(body: web::Json<Value>) -> HttpResponse {
    HttpResponse::Created().json(json!({ "received": body.into_inner() }))
}

async fn text_unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized()
        .content_type("text/plain")
        .body("Invalid JWT")
}

async fn empty_error() -> HttpResponse {
    HttpResponse::ServiceUnavailable().finish()
}

async fn no_content() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

async fn slow() -> HttpResponse {
    actix_web::rt::time::sleep(Duration::from_secs(3)).await;
    HttpResponse::Ok().finish()
}

/// Start a local stand-in backend and return its base URL.
fn spawn_backend() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/echo", web::get().to(echo_headers))
            .route("/api/contact", web::post().to(create_contact))
            .route("/api/bank-details", web::get().to(text_unauthorized))
            .route("/api/instructors", web::get().to(empty_error))
            .route("/api/sessions/s1/bookings", web::post().to(no_content))
            .route("/slow", web::get().to(slow))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind ephemeral port");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

#[actix_web::test]
async fn test_json_reply_and_forwarded_headers() {
    let base = spawn_backend();
    let backend = HttpBackend::new().unwrap();

    let resp = backend
        .send(
            BackendRequest::get(format!("{base}/echo"))
                .query("date=2024-07-01")
                .bearer("member-token")
                .header("X-Organization-Id", "org_42"),
        )
        .await
        .unwrap();

    assert_eq!(resp.status, 200);
    let data = resp.into_data().unwrap();
    assert_eq!(data["authorization"], "Bearer member-token");
    assert_eq!(data["content_type"], "application/json");
    assert_eq!(data["organization"], "org_42");
    assert_eq!(data["query"], "date=2024-07-01");
}

#[actix_web::test]
async fn test_post_body_and_201() {
    let base = spawn_backend();
    let backend = HttpBackend::new().unwrap();

    let resp = backend
        .send(BackendRequest::post(
            format!("{base}/api/contact"),
            json!({ "name": "Ada", "email": "ada@example.com", "message": "hi" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status, 201);
    assert!(resp.is_success());
    assert_eq!(resp.data().unwrap()["received"]["name"], "Ada");
}

#[actix_web::test]
async fn test_text_error_body_is_wrapped() {
    let base = spawn_backend();
    let backend = HttpBackend::new().unwrap();

    let resp = backend
        .send(BackendRequest::get(format!("{base}/api/bank-details")))
        .await
        .unwrap();

    assert_eq!(resp.status, 401);
    assert_eq!(resp.status_text, "Unauthorized");
    match resp.payload {
        BackendPayload::Error(body) => assert_eq!(body, json!({ "error": "Invalid JWT" })),
        other => panic!("expected error payload, got {other:?}"),
    }
}

#[actix_web::test]
async fn test_empty_error_body_uses_status_text() {
    let base = spawn_backend();
    let backend = HttpBackend::new().unwrap();

    let resp = backend
        .send(BackendRequest::get(format!("{base}/api/instructors")))
        .await
        .unwrap();

    assert_eq!(resp.status, 503);
    assert_eq!(
        resp.error_message().as_deref(),
        Some("Service Unavailable")
    );
}

#[actix_web::test]
async fn test_empty_success_body() {
    let base = spawn_backend();
    let backend = HttpBackend::new().unwrap();

    let resp = backend
        .send(BackendRequest::post(
            format!("{base}/api/sessions/s1/bookings"),
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status, 204);
    assert!(matches!(resp.payload, BackendPayload::Data(None)));
}

#[actix_web::test]
async fn test_per_request_timeout() {
    let base = spawn_backend();
    let backend = HttpBackend::new().unwrap();

    let err = backend
        .send(BackendRequest::get(format!("{base}/slow")).timeout(Duration::from_millis(200)))
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Timeout { .. }), "{err:?}");
}

#[actix_web::test]
async fn test_closed_port_is_unreachable() {
    let backend = HttpBackend::new().unwrap();

    let err = backend
        .send(BackendRequest::get("http://127.0.0.1:1/api/sessions"))
        .await
        .unwrap_err();

    assert!(err.is_unreachable(), "{err:?}");
}

#[actix_web::test]
async fn test_malformed_url_is_not_unreachable() {
    let backend = HttpBackend::new().unwrap();

    let err = backend
        .send(BackendRequest::get("not a url"))
        .await
        .unwrap_err();

    assert!(!err.is_unreachable(), "{err:?}");
}
