use std::time::Duration;

use serde_json::json;

use super::{BackendError, BackendRequest, BackendResponse, BackendTransport};

/// Abort limit for link generation.
pub const GENERATE_LINK_TIMEOUT: Duration = Duration::from_secs(10);

/// Admin client for the auth provider, authenticated with the service-role key.
#[derive(Debug, Clone, Copy)]
pub struct AuthProviderClient<'a> {
    transport: &'a dyn BackendTransport,
    base_url: &'a str,
    service_role_key: &'a str,
}

impl<'a> AuthProviderClient<'a> {
    pub fn new(
        transport: &'a dyn BackendTransport,
        base_url: &'a str,
        service_role_key: &'a str,
    ) -> Self {
        Self {
            transport,
            base_url,
            service_role_key,
        }
    }

    /// Request for a recovery link for `email`, redirecting to `redirect_to`.
    pub fn recovery_link_request(&self, email: &str, redirect_to: &str) -> BackendRequest {
        let url = format!(
            "{}/auth/v1/admin/generate_link",
            self.base_url.trim_end_matches('/')
        );
        BackendRequest::post(
            url,
            json!({
                "type": "recovery",
                "email": email,
                "redirect_to": redirect_to,
            }),
        )
        .header("apikey", self.service_role_key)
        .bearer(self.service_role_key)
        .timeout(GENERATE_LINK_TIMEOUT)
    }

    pub async fn generate_recovery_link(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<BackendResponse, BackendError> {
        self.transport
            .send(self.recovery_link_request(email, redirect_to))
            .await
    }
}
