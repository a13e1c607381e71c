//! Outbound calls to the tenant backend and the auth provider.
//!
//! Every outbound call goes through a [`BackendTransport`]. An ordinary HTTP
//! error status is a successful transport call: it comes back as a
//! [`BackendResponse`] carrying the status and an error payload. Only
//! transport failures surface as [`BackendError`].

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};
use thiserror::Error;

pub mod auth_provider;
pub mod http;
pub mod tenant;

pub use auth_provider::AuthProviderClient;
pub use http::HttpBackend;
pub use tenant::TenantClient;

/// One outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
    pub timeout: Option<Duration>,
}

impl BackendRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, url).json(body)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a raw query string (without the leading `?`). Empty is a no-op.
    pub fn query(mut self, query_string: &str) -> Self {
        let query_string = query_string.trim_start_matches('?');
        if !query_string.is_empty() {
            let sep = if self.url.contains('?') { '&' } else { '?' };
            self.url = format!("{}{sep}{query_string}", self.url);
        }
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// First value of header `name`, compared case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Path and query of the target URL, e.g. `/api/sessions?date=today`.
    pub fn path(&self) -> &str {
        let after_scheme = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.url);
        after_scheme
            .find('/')
            .map(|idx| &after_scheme[idx..])
            .unwrap_or("/")
    }
}

/// Body of a backend reply. Data and error never coexist.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendPayload {
    /// 2xx reply; `None` when the body was empty or not JSON.
    Data(Option<Value>),
    /// Non-2xx reply; the JSON body as sent, or `{"error": text}`.
    Error(Value),
}

/// Uniform result of one outbound call that reached the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendResponse {
    pub status: u16,
    pub status_text: String,
    pub payload: BackendPayload,
}

impl BackendResponse {
    /// Build a response from raw parts, parsing the body opportunistically.
    pub fn from_parts(status: u16, status_text: impl Into<String>, body: &[u8]) -> Self {
        let status_text = status_text.into();
        let parsed = if body.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            serde_json::from_slice::<Value>(body).ok()
        };

        let payload = if (200..300).contains(&status) {
            if parsed.is_none() && !body.is_empty() {
                tracing::debug!(status, "ignoring non-JSON success body");
            }
            BackendPayload::Data(parsed)
        } else {
            let error = match parsed {
                Some(value) => value,
                None => {
                    let text = String::from_utf8_lossy(body).trim().to_string();
                    if text.is_empty() {
                        json!({ "error": status_text })
                    } else {
                        json!({ "error": text })
                    }
                }
            };
            BackendPayload::Error(error)
        };

        Self {
            status,
            status_text,
            payload,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.payload, BackendPayload::Data(_))
    }

    pub fn data(&self) -> Option<&Value> {
        match &self.payload {
            BackendPayload::Data(data) => data.as_ref(),
            BackendPayload::Error(_) => None,
        }
    }

    pub fn into_data(self) -> Option<Value> {
        match self.payload {
            BackendPayload::Data(data) => data,
            BackendPayload::Error(_) => None,
        }
    }

    /// Short error text: `error`, then `message`, then `msg`, then the status text.
    pub fn error_message(&self) -> Option<String> {
        let BackendPayload::Error(body) = &self.payload else {
            return None;
        };
        let message = ["error", "message", "msg", "error_description"]
            .iter()
            .find_map(|key| body.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| self.status_text.clone());
        Some(message)
    }
}

/// Transport-level failure: the backend was never heard from.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unreachable at {url}: {detail}")]
    Unreachable { url: String, detail: String },
    #[error("backend request to {url} timed out")]
    Timeout { url: String },
    #[error("invalid backend request: {detail}")]
    InvalidRequest { detail: String },
    #[error("backend transport error at {url}: {detail}")]
    Transport { url: String, detail: String },
}

impl BackendError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, BackendError::Unreachable { .. })
    }
}

/// Performs one outbound call.
#[async_trait]
pub trait BackendTransport: Send + Sync + fmt::Debug {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse, BackendError>;
}
