//! Domain services containing core business logic.

mod prompt_builder;

pub use prompt_builder::*;
