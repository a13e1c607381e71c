//! Actix test-service builder wired with the production routes.

use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{web, App, Error as ActixError};

use crate::config::Config;
use crate::infra::state::build_state;
use crate::middleware::request_trace::RequestTrace;
use crate::state::app_state::AppState;
use crate::test_support::StubTransport;

/// State with local defaults, a service-role key, and the given stub backend.
pub fn test_state(stub: Arc<StubTransport>) -> AppState {
    let mut config = Config::local();
    config.organization_id = Some("org_test".to_string());
    config.auth_service_role_key = Some("service-role-test-key".to_string());

    // Building with an explicit config and transport cannot fail.
    #[allow(clippy::unwrap_used)]
    build_state()
        .with_config(config)
        .with_transport(stub)
        .build()
        .unwrap()
}

/// Initialize an Actix test service over `state` with the production routes.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    actix_web::test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(crate::routes::configure),
    )
    .await
}
