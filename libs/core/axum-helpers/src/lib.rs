//! Shared HTTP plumbing for axum applications: server startup with graceful
//! shutdown, common middleware, health endpoints, and request extractors.

pub mod errors;
pub mod extractors;
pub mod server;

pub use extractors::ValidatedJson;
pub use server::{create_app, create_router, health_router};
