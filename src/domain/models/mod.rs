mod chat;
mod model_catalog;
mod prompt;

pub use chat::*;
pub use model_catalog::*;
pub use prompt::*;
