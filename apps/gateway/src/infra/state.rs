use std::sync::Arc;

use crate::backend::{BackendTransport, HttpBackend};
use crate::config::Config;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: Option<Config>,
    transport: Option<Arc<dyn BackendTransport>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the reqwest transport, e.g. with a stub in tests.
    pub fn with_transport(mut self, transport: Arc<dyn BackendTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let config = match self.config {
            Some(config) => config,
            None => Config::from_env()?,
        };
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpBackend::new().map_err(|e| AppError::config(e.to_string()))?),
        };
        Ok(AppState::new(config, transport))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
