use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::ChatCompletionProvider;
use crate::domain::{
    build_prompt, ChatRequest, ChatResponse, CompletionSettings, DomainError, DEFAULT_MODEL_ID,
    DEFAULT_TEMPERATURE,
};

/// Answers one question against caller-supplied context.
///
/// Stateless: the provider and settings are shared read-only, the API key
/// travels with each request and is never stored.
pub struct ChatUseCase {
    provider: Arc<dyn ChatCompletionProvider>,
    settings: CompletionSettings,
}

impl ChatUseCase {
    pub fn new(provider: Arc<dyn ChatCompletionProvider>) -> Self {
        Self {
            provider,
            settings: CompletionSettings::new(DEFAULT_MODEL_ID, DEFAULT_TEMPERATURE),
        }
    }

    /// Target a different provider model, keeping the fixed temperature.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.settings = CompletionSettings::new(model, self.settings.temperature());
        self
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    pub async fn execute(&self, request: &ChatRequest) -> Result<ChatResponse, DomainError> {
        let request_id = Uuid::new_v4();

        if !request.has_credentials() {
            warn!(%request_id, "Rejecting chat request without api_key");
            return Err(DomainError::MissingCredential);
        }

        info!(
            %request_id,
            "Chat request: model={} query_len={} context_len={}",
            self.settings.model(),
            request.query().len(),
            request.context().len()
        );

        let messages = build_prompt(request.query(), request.context());
        let start_time = Instant::now();

        let text = self
            .provider
            .invoke(&messages, &self.settings, request.api_key())
            .await
            .map_err(|e| {
                warn!(%request_id, "Provider call failed: {e}");
                match e {
                    e @ DomainError::ProviderError(_) => e,
                    other => DomainError::provider(other.to_string()),
                }
            })?;

        debug!(
            %request_id,
            "Provider answered in {:?} ({} chars)",
            start_time.elapsed(),
            text.len()
        );

        Ok(ChatResponse::ok(text))
    }
}
