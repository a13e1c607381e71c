use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::warn;

use super::require_email;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::logging::security;
use crate::proxy::reset_link::{reset_link_from_reply, RESET_PASSWORD_PATH};
use crate::proxy::{relay, transport_error};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResetLinkRequest {
    pub email: String,
}

/// Generate a recovery link through the auth provider's admin API and hand
/// back the token hash plus a link to the site's reset page.
async fn password_reset_link(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ResetLinkRequest>,
) -> Result<HttpResponse, AppError> {
    let email = require_email(&body.email)?;
    let provider = app_state.auth_provider()?;
    let site_url = &app_state.config.site_url;

    let response = provider
        .generate_recovery_link(email, &format!("{site_url}{RESET_PASSWORD_PATH}"))
        .await
        .map_err(|e| transport_error("password_reset_link", e))?;

    if !response.is_success() {
        warn!(
            status = response.status,
            error = %response.error_message().unwrap_or_default(),
            "auth provider refused to generate recovery link"
        );
        return Ok(relay(response));
    }

    let reset = response
        .data()
        .and_then(|reply| reset_link_from_reply(site_url, reply))
        .ok_or_else(|| AppError::internal("recovery link reply carried no token hash"))?;

    security::reset_link_issued(email);
    Ok(HttpResponse::Ok().json(reset))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/password-reset-link", web::post().to(password_reset_link));
}
