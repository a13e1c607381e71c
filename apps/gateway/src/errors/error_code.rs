//! Error codes for the gateway API.
//!
//! Every error body the gateway emits carries one of these codes. Add new
//! codes here; never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes for the gateway API.
///
/// Each variant maps to the SCREAMING_SNAKE_CASE string that appears in the
/// `code` field of an error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// No usable session on a protected route
    Unauthorized,

    // Request validation
    /// A request field failed validation
    ValidationError,
    /// Request body could not be read or parsed
    BadRequest,
    /// Class session id path segment is malformed
    InvalidSessionId,
    /// Email address is missing or malformed
    InvalidEmail,

    // Upstream
    /// Tenant backend or auth provider could not be reached
    BackendUnavailable,

    // System
    /// Internal server error
    Internal,
    /// Required configuration is missing
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidSessionId => "INVALID_SESSION_ID",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::BackendUnavailable => "BACKEND_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
