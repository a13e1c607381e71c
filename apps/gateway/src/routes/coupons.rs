use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::require_non_blank;
use crate::error::AppError;
use crate::extractors::{SessionToken, ValidatedJson};
use crate::proxy::forward;
use crate::state::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct ValidateCouponRequest {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    /// Fields the gateway does not inspect, forwarded untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

async fn validate_coupon(
    session: SessionToken,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ValidateCouponRequest>,
) -> Result<HttpResponse, AppError> {
    let mut coupon = body.into_inner();
    coupon.code = require_non_blank(&coupon.code, "code")?.to_string();

    let tenant = app_state.tenant();
    let request = tenant.post(
        "/api/coupons/validate",
        serde_json::to_value(&coupon)?,
        Some(session.token()),
    );
    forward("validate_coupon", tenant.send(request).await)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/coupons/validate", web::post().to(validate_coupon));
}
