mod mistral_client;
mod mock_provider;

pub use mistral_client::*;
pub use mock_provider::*;
