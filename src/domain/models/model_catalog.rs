use serde::Serialize;

/// Provider model identifier every chat request is sent to.
pub const DEFAULT_MODEL_ID: &str = "mistral-large-latest";

/// Sampling temperature every chat request is sent with.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// Path segment under `/chat/`.
    pub route: &'static str,
    /// Identifier sent to the provider.
    pub provider_id: &'static str,
    /// Name advertised by `GET /models`.
    pub listing_name: &'static str,
    pub description: &'static str,
}

const MISTRAL_LARGE: ModelInfo = ModelInfo {
    route: "mistral-large",
    provider_id: DEFAULT_MODEL_ID,
    listing_name: "mistral_large_latest",
    description: "POST endpoint for chatting with the Mistral Large model",
};

const SUPPORTED_MODELS: &[ModelInfo] = &[MISTRAL_LARGE];

pub struct ModelCatalog;

impl ModelCatalog {
    pub fn supported() -> &'static [ModelInfo] {
        SUPPORTED_MODELS
    }

    pub fn default_model() -> &'static ModelInfo {
        &MISTRAL_LARGE
    }

    pub fn find_by_route(route: &str) -> Option<&'static ModelInfo> {
        SUPPORTED_MODELS.iter().find(|m| m.route == route)
    }
}

/// Body of `GET /models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelListing {
    pub supported_models: Vec<String>,
    pub default_model: String,
}

impl ModelListing {
    pub fn from_catalog() -> Self {
        Self {
            supported_models: ModelCatalog::supported()
                .iter()
                .map(|m| m.listing_name.to_string())
                .collect(),
            default_model: ModelCatalog::default_model().listing_name.to_string(),
        }
    }
}
