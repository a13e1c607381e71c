use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{require_email, require_non_blank};
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::proxy::forward;
use crate::state::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    /// Fields the gateway does not inspect, forwarded untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContactRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank(&self.name, "name")?;
        require_email(&self.email)?;
        require_non_blank(&self.message, "message")?;
        Ok(())
    }
}

/// Public contact form; no session involved.
async fn submit_contact(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ContactRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let tenant = app_state.tenant();
    let request = tenant.post("/api/contact", serde_json::to_value(&*body)?, None);
    forward("contact", tenant.send(request).await)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(submit_contact));
}
