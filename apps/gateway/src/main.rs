use actix_web::{web, App, HttpServer};
use gateway::config::Config;
use gateway::infra::state::build_state;
use gateway::middleware::cors::cors_middleware;
use gateway::middleware::request_trace::RequestTrace;
use gateway::middleware::structured_logger::StructuredLogger;
use gateway::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let host = config.host.clone();
    let port = config.port;
    let allowed_origins = config.cors_allowed_origins.clone();

    if config.auth_service_role_key.is_none() {
        tracing::warn!("AUTH_SERVICE_ROLE_KEY is not set; password reset links are disabled");
    }

    let app_state = match build_state().with_config(config).build() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("🚀 Starting studio gateway on http://{}:{}", host, port);

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&allowed_origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
