use std::sync::Arc;

use actix_web::test;
use gateway::test_support::{create_test_app, test_state, StubReply, StubTransport};
use serde_json::json;

use crate::common::{assert_error, read_json};

#[actix_web::test]
async fn test_contact_201_passthrough() {
    let created = json!({ "id": "c_81", "status": "received" });
    let stub = Arc::new(
        StubTransport::new().on_post("/api/contact", StubReply::json(201, created.clone())),
    );
    let app = create_test_app(test_state(stub.clone())).await;

    let form = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "+34 600 000 000",
        "message": "Do you have beginner classes?",
        "subject": "Private class",
        "preferred_time": "morning"
    });
    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(form.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 201);
    assert_eq!(read_json(resp).await, created);

    let call = &stub.calls()[0];
    assert_eq!(call.body, Some(form));
    assert_eq!(call.header_value("authorization"), None);
}

#[actix_web::test]
async fn test_contact_validation() {
    let stub = Arc::new(StubTransport::new());
    let app = create_test_app(test_state(stub.clone())).await;

    let cases = [
        (json!({ "name": "", "email": "a@b.c", "message": "hi" }), "VALIDATION_ERROR"),
        (json!({ "name": "Ada", "email": "nope", "message": "hi" }), "INVALID_EMAIL"),
        (json!({ "name": "Ada", "email": "a@b.c", "message": " " }), "VALIDATION_ERROR"),
        (json!({ "name": "Ada", "email": "a@b.c" }), "BAD_REQUEST"),
    ];
    for (body, code) in cases {
        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error(resp, 400, code).await;
    }

    assert!(stub.calls().is_empty());
}

#[actix_web::test]
async fn test_contact_unreachable_is_503() {
    let stub = Arc::new(StubTransport::refusing());
    let app = create_test_app(test_state(stub)).await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({ "name": "Ada", "email": "a@b.c", "message": "hi" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error(resp, 503, "BACKEND_UNAVAILABLE").await;
}
