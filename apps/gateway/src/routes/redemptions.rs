use actix_web::{web, HttpRequest, HttpResponse};

use crate::extractors::SessionToken;
use crate::proxy::degrade_list;
use crate::state::AppState;

async fn list_redemptions(
    req: HttpRequest,
    session: SessionToken,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let tenant = app_state.tenant();
    let request = tenant
        .get("/api/redemptions", Some(session.token()))
        .query(req.query_string());
    degrade_list("redemptions", "redemptions", tenant.send(request).await)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/redemptions", web::get().to(list_redemptions));
}
