//! Gateway test support utilities
//!
//! Logging initialization for test binaries and assertions for the gateway's
//! JSON error body, usable without depending on gateway types.

pub mod error_body;
pub mod logging;
