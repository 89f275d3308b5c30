//! # Domain Layer
//!
//! Request/response models, prompt assembly and the error taxonomy.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
