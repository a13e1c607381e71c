use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

/// Emits one `request_completed` event per request.
///
/// Level follows the status class: 5xx at error, 4xx at warn, the rest at
/// info. `http.route` is the matched route pattern (e.g.
/// `/api/sessions/{id}/book`), so booking calls group under one name.
/// `backend_unavailable` marks the 503s raised for an unreachable backend.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// What gets logged once the response is known.
#[derive(Debug)]
struct Completion {
    method: String,
    path: String,
    route: String,
    trace_id: String,
    status: StatusCode,
    duration_ms: u64,
}

impl Completion {
    fn backend_unavailable(&self) -> bool {
        self.status == StatusCode::SERVICE_UNAVAILABLE
    }

    fn emit(&self) {
        let Completion {
            method,
            path,
            route,
            trace_id,
            status,
            duration_ms,
        } = self;
        let status_code = status.as_u16();
        let backend_unavailable = self.backend_unavailable();

        if status.is_server_error() {
            error!(http.method = %method, url.path = %path, http.route = %route, http.status_code = status_code, backend_unavailable, duration_ms, trace_id = %trace_id, "request_completed");
        } else if status.is_client_error() {
            warn!(http.method = %method, url.path = %path, http.route = %route, http.status_code = status_code, duration_ms, trace_id = %trace_id, "request_completed");
        } else {
            info!(http.method = %method, url.path = %path, http.route = %route, http.status_code = status_code, duration_ms, trace_id = %trace_id, "request_completed");
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            // The pattern is only known once routing has run.
            let (status, route) = match &result {
                Ok(res) => (res.status(), res.request().match_pattern()),
                Err(err) => (err.as_response_error().status_code(), None),
            };

            Completion {
                method,
                route: route.unwrap_or_else(|| path.clone()),
                path,
                trace_id,
                status,
                duration_ms: started.elapsed().as_millis() as u64,
            }
            .emit();

            result
        })
    }
}
