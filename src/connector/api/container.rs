use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatCompletionProvider, ChatUseCase, ListModelsUseCase};
use crate::connector::adapter::{MistralClient, MockChatProvider};

#[derive(Debug, Clone, Default)]
pub struct ContainerConfig {
    /// Answer from [`MockChatProvider`] instead of calling the hosted model.
    pub mock_provider: bool,
    /// Provider base URL. `None` falls back to `MISTRAL_BASE_URL`, then the
    /// public Mistral endpoint.
    pub base_url: Option<String>,
}

/// Wires the provider into the use cases. Built once at startup and shared
/// read-only between requests.
pub struct Container {
    provider: Arc<dyn ChatCompletionProvider>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let provider: Arc<dyn ChatCompletionProvider> = if config.mock_provider {
            debug!("Using mock chat provider");
            Arc::new(MockChatProvider::new())
        } else {
            let client = match config.base_url.as_deref() {
                Some(base) => MistralClient::new(base),
                None => MistralClient::from_env(),
            };
            debug!("Using Mistral chat provider at {}", client.url());
            Arc::new(client)
        };

        Self { provider, config }
    }

    /// Build a container around an already constructed provider.
    pub fn with_provider(provider: Arc<dyn ChatCompletionProvider>) -> Self {
        Self {
            provider,
            config: ContainerConfig::default(),
        }
    }

    pub fn chat_use_case(&self) -> ChatUseCase {
        ChatUseCase::new(self.provider.clone())
    }

    pub fn list_models_use_case(&self) -> ListModelsUseCase {
        ListModelsUseCase::new()
    }

    pub fn mock_provider(&self) -> bool {
        self.config.mock_provider
    }
}
