//! Scripted in-memory stand-in for the tenant backend and auth provider.

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::backend::{BackendError, BackendRequest, BackendResponse, BackendTransport};

#[derive(Debug, Clone)]
pub enum StubReply {
    /// Reply with a status and raw body bytes.
    Respond { status: u16, body: Vec<u8> },
    /// Behave like a refused TCP connection.
    Refuse,
    /// Behave like an aborted request.
    Timeout,
}

impl StubReply {
    pub fn json(status: u16, body: Value) -> Self {
        StubReply::Respond {
            status,
            body: body.to_string().into_bytes(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        StubReply::Respond {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn empty(status: u16) -> Self {
        StubReply::Respond {
            status,
            body: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct StubRoute {
    method: Method,
    path: String,
    reply: StubReply,
}

/// Routes are matched on method and path (query ignored), first match wins.
/// Unmatched requests get the fallback reply, a bare 404 unless changed.
#[derive(Debug)]
pub struct StubTransport {
    routes: Vec<StubRoute>,
    fallback: StubReply,
    calls: Mutex<Vec<BackendRequest>>,
}

impl Default for StubTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            fallback: StubReply::empty(404),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A backend that refuses every connection.
    pub fn refusing() -> Self {
        Self::new().otherwise(StubReply::Refuse)
    }

    pub fn on(mut self, method: Method, path: &str, reply: StubReply) -> Self {
        self.routes.push(StubRoute {
            method,
            path: path.to_string(),
            reply,
        });
        self
    }

    pub fn on_get(self, path: &str, reply: StubReply) -> Self {
        self.on(Method::GET, path, reply)
    }

    pub fn on_post(self, path: &str, reply: StubReply) -> Self {
        self.on(Method::POST, path, reply)
    }

    pub fn otherwise(mut self, reply: StubReply) -> Self {
        self.fallback = reply;
        self
    }

    /// Every request seen so far, in order.
    pub fn calls(&self) -> Vec<BackendRequest> {
        self.calls.lock().clone()
    }

    /// Number of requests whose path (query ignored) equals `path`.
    pub fn calls_to(&self, path: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|req| strip_query(req.path()) == path)
            .count()
    }

    fn reply_for(&self, request: &BackendRequest) -> StubReply {
        let path = strip_query(request.path());
        self.routes
            .iter()
            .find(|route| route.method == request.method && route.path == path)
            .map(|route| route.reply.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

fn strip_query(path: &str) -> &str {
    path.split_once('?').map(|(p, _)| p).unwrap_or(path)
}

#[async_trait]
impl BackendTransport for StubTransport {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse, BackendError> {
        let reply = self.reply_for(&request);
        let url = request.url.clone();
        self.calls.lock().push(request);

        match reply {
            StubReply::Respond { status, body } => {
                let status_text = StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("");
                Ok(BackendResponse::from_parts(status, status_text, &body))
            }
            StubReply::Refuse => Err(BackendError::Unreachable {
                url,
                detail: "connection refused".to_string(),
            }),
            StubReply::Timeout => Err(BackendError::Timeout { url }),
        }
    }
}
