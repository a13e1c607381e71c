use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::SessionToken;
use crate::proxy::forward;
use crate::state::AppState;

/// Studio bank details shown to members paying by transfer.
async fn bank_details(
    session: SessionToken,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tenant = app_state.tenant();
    let request = tenant.get("/api/bank-details", Some(session.token()));
    forward("bank_details", tenant.send(request).await)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/bank-details", web::get().to(bank_details));
}
