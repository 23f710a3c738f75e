mod app;
mod health;
mod shutdown;

pub use app::{create_app, create_router};
pub use health::{health_handler, health_router};
pub use shutdown::shutdown_signal;
