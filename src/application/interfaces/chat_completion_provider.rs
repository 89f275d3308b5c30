use async_trait::async_trait;

use crate::domain::{CompletionSettings, DomainError, PromptMessage};

/// A hosted model that turns an ordered list of role-tagged messages into text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. The chat use case stays decoupled from any particular provider or
/// HTTP client library, so an alternate provider can be substituted without
/// touching it.
#[async_trait]
pub trait ChatCompletionProvider: Send + Sync {
    /// Send `messages` to `settings.model()` using the caller's `api_key` and
    /// return the generated text.
    ///
    /// Every failure (auth, transport, malformed output) is reported as
    /// [`DomainError::ProviderError`].
    async fn invoke(
        &self,
        messages: &[PromptMessage],
        settings: &CompletionSettings,
        api_key: &str,
    ) -> Result<String, DomainError>;
}
