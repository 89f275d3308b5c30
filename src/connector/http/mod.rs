//! Axum HTTP surface over the chat and model catalog use cases.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use handlers::{AppState, HEALTH_STATUS};
pub use server::{build_app, serve, ServerConfig};
