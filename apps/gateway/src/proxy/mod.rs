//! Mapping of backend results onto client responses.
//!
//! Two policies exist. Mutation and session-sensitive routes *forward*: the
//! backend status and body reach the client unchanged, an unreachable
//! backend becomes 503 and any other transport failure a generic 500. List
//! routes *degrade*: anything but a successful reply becomes `200 []` so the
//! calling page never fails hard.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::Value;
use tracing::warn;

use crate::backend::{BackendError, BackendPayload, BackendResponse};
use crate::error::AppError;

pub mod normalize;
pub mod reset_link;

pub use normalize::normalize_list;

/// Client response carrying the backend's status and body as-is.
pub fn relay(response: BackendResponse) -> HttpResponse {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    match response.payload {
        BackendPayload::Data(Some(body)) | BackendPayload::Error(body) => {
            HttpResponse::build(status).json(body)
        }
        BackendPayload::Data(None) => HttpResponse::build(status).finish(),
    }
}

/// Client-facing error for a transport failure.
pub fn transport_error(route: &str, err: BackendError) -> AppError {
    if err.is_unreachable() {
        AppError::backend_unavailable(format!("{route}: {err}"))
    } else {
        AppError::internal(format!("{route}: {err}"))
    }
}

/// Forward policy for mutation and session-sensitive routes.
pub fn forward(
    route: &str,
    result: Result<BackendResponse, BackendError>,
) -> Result<HttpResponse, AppError> {
    let response = result.map_err(|e| transport_error(route, e))?;
    if !response.is_success() {
        warn!(
            route,
            status = response.status,
            error = %response.error_message().unwrap_or_default(),
            "backend rejected request"
        );
    }
    Ok(relay(response))
}

/// Degrade policy for list routes: always `200`, empty on any failure.
pub fn degrade_list(
    route: &str,
    key: &str,
    result: Result<BackendResponse, BackendError>,
) -> HttpResponse {
    let items = match result {
        Ok(response) if response.is_success() => normalize_list(response.into_data(), key),
        Ok(response) => {
            warn!(
                route,
                status = response.status,
                error = %response.error_message().unwrap_or_default(),
                "backend returned an error status, serving empty list"
            );
            Vec::new()
        }
        Err(err) => {
            warn!(route, error = %err, "backend call failed, serving empty list");
            Vec::new()
        }
    };
    HttpResponse::Ok().json(Value::Array(items))
}
