use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod bank_details;
pub mod contact;
pub mod coupons;
pub mod health;
pub mod instructors;
pub mod packages;
pub mod password_reset;
pub mod redemptions;
pub mod sessions;

/// Configure application routes.
///
/// `main.rs` wraps the result in CORS, logging and trace middleware; tests
/// register the same paths with only `RequestTrace` in front.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Proxy surface: /api/**
    cfg.service(
        web::scope("/api")
            .configure(sessions::configure_routes)
            .configure(packages::configure_routes)
            .configure(redemptions::configure_routes)
            .configure(coupons::configure_routes)
            .configure(instructors::configure_routes)
            .configure(bank_details::configure_routes)
            .configure(contact::configure_routes)
            .configure(password_reset::configure_routes),
    );
}

/// Trimmed `value`, or a 400 naming `field` when it is blank.
pub(crate) fn require_non_blank<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("{field} is required"),
        ));
    }
    Ok(trimmed)
}

/// Whether `value` is safe to splice into a backend path as one segment:
/// non-empty ASCII alphanumerics, `-` and `_` only.
pub(crate) fn is_path_segment(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Minimal address check: non-blank and containing `@`.
pub(crate) fn require_email(value: &str) -> Result<&str, AppError> {
    let trimmed = value.trim();
    if !trimmed.contains('@') {
        return Err(AppError::invalid(
            ErrorCode::InvalidEmail,
            "A valid email address is required",
        ));
    }
    Ok(trimmed)
}
