//! List routes answer `200 []` whatever happens upstream.

use std::sync::Arc;

use actix_web::test;
use gateway::test_support::{create_test_app, test_state, StubReply, StubTransport};
use serde_json::json;

use crate::common::read_json;

const LISTS: &[&str] = &[
    "/api/sessions",
    "/api/packages",
    "/api/instructors",
    "/api/redemptions",
];

async fn assert_all_lists_empty(stub: StubTransport) {
    let stub = Arc::new(stub);
    let app = create_test_app(test_state(stub.clone())).await;

    for uri in LISTS {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Authorization", "Bearer member-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200, "{uri}");
        assert_eq!(read_json(resp).await, json!([]), "{uri}");
    }

    assert_eq!(stub.calls().len(), LISTS.len());
}

#[actix_web::test]
async fn test_connection_refused_degrades() {
    assert_all_lists_empty(StubTransport::refusing()).await;
}

#[actix_web::test]
async fn test_timeout_degrades() {
    assert_all_lists_empty(StubTransport::new().otherwise(StubReply::Timeout)).await;
}

#[actix_web::test]
async fn test_error_status_degrades() {
    assert_all_lists_empty(
        StubTransport::new().otherwise(StubReply::text(500, "upstream exploded")),
    )
    .await;
}
