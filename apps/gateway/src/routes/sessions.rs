use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::{json, Value};

use super::is_path_segment;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{MaybeSession, OptionalJson, SessionToken};
use crate::proxy::{degrade_list, forward};
use crate::state::AppState;

async fn list_sessions(
    req: HttpRequest,
    session: MaybeSession,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let tenant = app_state.tenant();
    let request = tenant
        .get("/api/sessions", session.token())
        .query(req.query_string());
    degrade_list("sessions", "sessions", tenant.send(request).await)
}

async fn book_session(
    path: web::Path<String>,
    session: SessionToken,
    app_state: web::Data<AppState>,
    body: OptionalJson<Value>,
) -> Result<HttpResponse, AppError> {
    let session_id = path.into_inner();
    if !is_path_segment(&session_id) {
        return Err(AppError::invalid(
            ErrorCode::InvalidSessionId,
            "Session id may only contain letters, digits, '-' and '_'",
        ));
    }
    let payload = body.into_inner().unwrap_or_else(|| json!({}));

    let tenant = app_state.tenant();
    let request = tenant.post(
        &format!("/api/sessions/{session_id}/bookings"),
        payload,
        Some(session.token()),
    );
    forward("book_session", tenant.send(request).await)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/sessions", web::get().to(list_sessions))
        .route("/sessions/{id}/book", web::post().to(book_session));
}
