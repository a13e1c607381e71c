//! Test doubles and app builders shared by unit and integration tests.

pub mod app_builder;
pub mod stub_transport;

pub use app_builder::{create_test_app, test_state};
pub use stub_transport::{StubReply, StubTransport};
