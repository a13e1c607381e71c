// reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, warn};

use super::{BackendError, BackendRequest, BackendResponse, BackendTransport};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    pub fn new() -> Result<Self, BackendError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!("studio-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::InvalidRequest {
                detail: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    fn headers(request: &BackendRequest) -> Result<HeaderMap, BackendError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                BackendError::InvalidRequest {
                    detail: format!("header name {name:?}: {e}"),
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| BackendError::InvalidRequest {
                detail: format!("header {name}: {e}"),
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    fn classify(url: &str, err: reqwest::Error) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_connect() {
            BackendError::Unreachable {
                url: url.to_string(),
                detail: err.to_string(),
            }
        } else if err.is_builder() {
            BackendError::InvalidRequest {
                detail: err.to_string(),
            }
        } else {
            BackendError::Transport {
                url: url.to_string(),
                detail: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl BackendTransport for HttpBackend {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse, BackendError> {
        let headers = Self::headers(&request)?;

        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            let err = Self::classify(&request.url, e);
            warn!(method = %request.method, url = %request.url, error = %err, "backend call failed");
            err
        })?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("").to_string();
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::classify(&request.url, e))?;

        debug!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            body_size = body.len(),
            "backend call completed"
        );

        Ok(BackendResponse::from_parts(status.as_u16(), status_text, &body))
    }
}
