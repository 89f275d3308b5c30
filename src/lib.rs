pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{ChatCompletionProvider, ChatUseCase, ListModelsUseCase};

pub use connector::{
    build_app, serve, ApiError, Container, ContainerConfig, MistralClient, MockChatProvider,
    ProviderCall, Router, ServerConfig,
};

pub use domain::{
    build_prompt, ChatRequest, ChatResponse, CompletionSettings, DomainError, ModelCatalog,
    ModelInfo, ModelListing, PromptMessage, Role, DEFAULT_MODEL_ID, DEFAULT_TEMPERATURE,
    SYSTEM_PROMPT,
};
