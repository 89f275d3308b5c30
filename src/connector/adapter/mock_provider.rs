use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ChatCompletionProvider;
use crate::domain::{CompletionSettings, DomainError, PromptMessage};

const DEFAULT_REPLY: &str = "Hello! I'm ELEVEN. This reply comes from the offline mock provider.";

/// One recorded call to [`MockChatProvider::invoke`].
#[derive(Debug, Clone)]
pub struct ProviderCall {
    pub messages: Vec<PromptMessage>,
    pub settings: CompletionSettings,
    pub api_key: String,
}

/// Offline provider returning a canned reply (or failure) and recording
/// every invocation.
pub struct MockChatProvider {
    outcome: Result<String, String>,
    calls: Mutex<Vec<ProviderCall>>,
}

impl MockChatProvider {
    pub fn new() -> Self {
        Self::replying(DEFAULT_REPLY)
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            outcome: Ok(reply.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(detail: impl Into<String>) -> Self {
        Self {
            outcome: Err(detail.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

impl Default for MockChatProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatCompletionProvider for MockChatProvider {
    async fn invoke(
        &self,
        messages: &[PromptMessage],
        settings: &CompletionSettings,
        api_key: &str,
    ) -> Result<String, DomainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(ProviderCall {
                messages: messages.to_vec(),
                settings: settings.clone(),
                api_key: api_key.to_string(),
            });
        }

        self.outcome.clone().map_err(DomainError::ProviderError)
    }
}
