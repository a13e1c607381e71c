use std::sync::Arc;

use actix_web::test;
use gateway::test_support::{create_test_app, test_state, StubReply, StubTransport};
use serde_json::json;

use crate::common::read_json;

#[actix_web::test]
async fn test_instructors_public_list() {
    let stub = Arc::new(StubTransport::new().on_get(
        "/api/instructors",
        StubReply::json(200, json!({ "instructors": [{ "name": "Maya" }, { "name": "Leo" }] })),
    ));
    let app = create_test_app(test_state(stub.clone())).await;

    let req = test::TestRequest::get().uri("/api/instructors").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        read_json(resp).await,
        json!([{ "name": "Maya" }, { "name": "Leo" }])
    );
    assert_eq!(stub.calls()[0].header_value("authorization"), None);
}

#[actix_web::test]
async fn test_instructors_non_list_reply_is_empty() {
    let stub = Arc::new(StubTransport::new().on_get(
        "/api/instructors",
        StubReply::text(200, "<html>maintenance</html>"),
    ));
    let app = create_test_app(test_state(stub)).await;

    let req = test::TestRequest::get().uri("/api/instructors").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(read_json(resp).await, json!([]));
}
