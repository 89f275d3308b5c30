use thiserror::Error;

/// Message returned when a chat request arrives without a provider key.
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "MISTRAL_API_KEY not provided. Please supply your Mistral API key in the api_key field.";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{}", MISSING_CREDENTIAL_MESSAGE)]
    MissingCredential,

    #[error("Error invoking Mistral model: {0}")]
    ProviderError(String),
}

impl DomainError {
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::ProviderError(msg.into())
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }

    pub fn is_provider_error(&self) -> bool {
        matches!(self, Self::ProviderError(_))
    }

    /// HTTP status the error is surfaced as.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingCredential => 400,
            Self::ProviderError(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_maps_to_client_error() {
        let err = DomainError::MissingCredential;
        assert_eq!(err.status_code(), 400);
        assert!(err.is_missing_credential());
        assert_eq!(err.to_string(), MISSING_CREDENTIAL_MESSAGE);
    }

    #[test]
    fn test_provider_error_embeds_detail() {
        let err = DomainError::provider("401 Unauthorized");
        assert_eq!(err.status_code(), 500);
        assert!(err.is_provider_error());
        assert_eq!(
            err.to_string(),
            "Error invoking Mistral model: 401 Unauthorized"
        );
    }
}
