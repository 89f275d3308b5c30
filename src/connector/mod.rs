//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion providers (Mistral over HTTP, offline mock)
//! - Dependency container and CLI controllers
//! - HTTP API (axum)

pub mod adapter;
pub mod api;
pub mod http;

pub use adapter::*;
pub use api::{Container, ContainerConfig, Router};
pub use http::{build_app, serve, ApiError, ServerConfig};
