use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use super::{is_path_segment, require_non_blank};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{MaybeSession, SessionToken, ValidatedJson};
use crate::proxy::{degrade_list, forward, transport_error};
use crate::state::AppState;

const GENERAL_REDEEM_PATH: &str = "/api/packages/redeem";

#[derive(Debug, Deserialize, Serialize)]
pub struct RedeemRequest {
    pub package_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    /// Fields the gateway does not inspect, forwarded untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Member-scoped redeem path; `me` when the caller gave no member id.
fn member_redeem_path(member_id: Option<&str>) -> Result<String, AppError> {
    let member = match member_id.map(str::trim).filter(|m| !m.is_empty()) {
        None => "me",
        Some(id) if is_path_segment(id) => id,
        Some(_) => {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "member_id may only contain letters, digits, '-' and '_'",
            ))
        }
    };
    Ok(format!("/api/members/{member}/packages/redeem"))
}

async fn list_packages(
    req: HttpRequest,
    session: MaybeSession,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let tenant = app_state.tenant();
    let request = tenant
        .get("/api/packages", session.token())
        .query(req.query_string());
    degrade_list("packages", "packages", tenant.send(request).await)
}

async fn redeem_package(
    session: SessionToken,
    app_state: web::Data<AppState>,
    body: ValidatedJson<RedeemRequest>,
) -> Result<HttpResponse, AppError> {
    let mut redeem = body.into_inner();
    redeem.package_id = require_non_blank(&redeem.package_id, "package_id")?.to_string();
    let member_path = member_redeem_path(redeem.member_id.as_deref())?;
    let payload = serde_json::to_value(&redeem)?;

    let tenant = app_state.tenant();
    let first = tenant
        .send(tenant.post(&member_path, payload.clone(), Some(session.token())))
        .await
        .map_err(|e| transport_error("redeem_package", e))?;

    if first.status != 404 {
        return forward("redeem_package", Ok(first));
    }

    info!(
        path = %member_path,
        "member redeem path not found, using general redeem path"
    );
    let fallback = tenant
        .send(tenant.post(GENERAL_REDEEM_PATH, payload, Some(session.token())))
        .await;
    forward("redeem_package", fallback)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/packages", web::get().to(list_packages))
        .route("/packages/redeem", web::post().to(redeem_package));
}
