use serde_json::Value;

use super::{BackendError, BackendRequest, BackendResponse, BackendTransport};

/// Header carrying the studio's organization id to the tenant backend.
pub const ORGANIZATION_HEADER: &str = "X-Organization-Id";

/// Request builder for the tenant backend, bound to one base URL.
#[derive(Debug, Clone, Copy)]
pub struct TenantClient<'a> {
    transport: &'a dyn BackendTransport,
    base_url: &'a str,
    organization_id: Option<&'a str>,
}

impl<'a> TenantClient<'a> {
    pub fn new(
        transport: &'a dyn BackendTransport,
        base_url: &'a str,
        organization_id: Option<&'a str>,
    ) -> Self {
        Self {
            transport,
            base_url,
            organization_id,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn decorate(&self, mut request: BackendRequest, session: Option<&str>) -> BackendRequest {
        if let Some(org) = self.organization_id {
            request = request.header(ORGANIZATION_HEADER, org);
        }
        if let Some(token) = session {
            request = request.bearer(token);
        }
        request
    }

    pub fn get(&self, path: &str, session: Option<&str>) -> BackendRequest {
        self.decorate(BackendRequest::get(self.url(path)), session)
    }

    pub fn post(&self, path: &str, body: Value, session: Option<&str>) -> BackendRequest {
        self.decorate(BackendRequest::post(self.url(path), body), session)
    }

    pub async fn send(&self, request: BackendRequest) -> Result<BackendResponse, BackendError> {
        self.transport.send(request).await
    }
}
