#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod backend;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod proxy;
pub mod routes;
pub mod state;
pub mod test_support;
pub mod trace_ctx;


// Re-exports for public API
pub use backend::{BackendError, BackendResponse, BackendTransport, HttpBackend};
pub use config::Config;
pub use error::AppError;
pub use extractors::{MaybeSession, SessionToken, ValidatedJson};
pub use infra::state::build_state;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
