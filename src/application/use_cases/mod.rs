mod chat;
mod list_models;

pub use chat::*;
pub use list_models::*;
