use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::logging::security;

/// Cookie the auth provider's browser client stores the access token in.
pub const SESSION_COOKIE: &str = "sb-access-token";

/// Bearer token of the signed-in member. Rejects the request with 401 when
/// there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    token: String,
}

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Token from `Authorization: Bearer <token>`, else from the session cookie.
    pub fn from_request_parts(req: &HttpRequest) -> Option<Self> {
        bearer_token(req)
            .or_else(|| cookie_token(req))
            .map(SessionToken::new)
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
            Some(token.to_string())
        }
        _ => None,
    }
}

fn cookie_token(req: &HttpRequest) -> Option<String> {
    let cookie = req.cookie(SESSION_COOKIE)?;
    let value = cookie.value().trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl FromRequest for SessionToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(SessionToken::from_request_parts(req).ok_or_else(|| {
            security::session_missing(req.path());
            AppError::unauthorized()
        }))
    }
}

/// Session token if present; public routes proceed anonymously without one.
#[derive(Debug, Clone, Default)]
pub struct MaybeSession(pub Option<SessionToken>);

impl MaybeSession {
    pub fn token(&self) -> Option<&str> {
        self.0.as_ref().map(SessionToken::token)
    }
}

impl FromRequest for MaybeSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(MaybeSession(SessionToken::from_request_parts(req))))
    }
}
