use std::sync::Arc;

use crate::backend::{AuthProviderClient, BackendTransport, TenantClient};
use crate::config::Config;
use crate::error::AppError;

/// Application state shared by every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    transport: Arc<dyn BackendTransport>,
}

impl AppState {
    pub fn new(config: Config, transport: Arc<dyn BackendTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn transport(&self) -> &dyn BackendTransport {
        self.transport.as_ref()
    }

    /// Client for the tenant backend with the configured organization id.
    pub fn tenant(&self) -> TenantClient<'_> {
        TenantClient::new(
            self.transport(),
            &self.config.tenant_api_url,
            self.config.organization_id.as_deref(),
        )
    }

    /// Admin client for the auth provider; needs `AUTH_SERVICE_ROLE_KEY`.
    pub fn auth_provider(&self) -> Result<AuthProviderClient<'_>, AppError> {
        let key = self
            .config
            .auth_service_role_key
            .as_deref()
            .ok_or_else(|| AppError::config("AUTH_SERVICE_ROLE_KEY must be set"))?;
        Ok(AuthProviderClient::new(
            self.transport(),
            &self.config.auth_provider_url,
            key,
        ))
    }
}
