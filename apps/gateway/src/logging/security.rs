use tracing::{info, warn};

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A protected route was called without a usable session.
pub fn session_missing(route: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_SESSION_MISSING",
        %trace_id,
        route,
        "Protected route called without a session"
    );
}

/// A password-reset link was generated for `email`.
pub fn reset_link_issued(email: &str) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "SECURITY_RESET_LINK_ISSUED",
        %trace_id,
        email = %Redacted(email),
        "Password reset link generated"
    );
}
