use actix_web::{web, HttpResponse};

use crate::extractors::MaybeSession;
use crate::proxy::degrade_list;
use crate::state::AppState;

async fn list_instructors(session: MaybeSession, app_state: web::Data<AppState>) -> HttpResponse {
    let tenant = app_state.tenant();
    let request = tenant.get("/api/instructors", session.token());
    degrade_list("instructors", "instructors", tenant.send(request).await)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/instructors", web::get().to(list_instructors));
}
