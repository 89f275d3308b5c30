use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatCompletionProvider;
use crate::domain::{CompletionSettings, DomainError, PromptMessage};

pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai";
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Mistral chat completions request payload.
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the Mistral chat completions API.
///
/// Implements [`ChatCompletionProvider`]. The API key is not part of the
/// client: it is supplied per call and sent as a bearer token, so one client
/// (and its connection pool) serves every caller.
///
/// No request timeout is configured; the call waits for the provider.
///
/// **Base URL**: defaults to `https://api.mistral.ai`. Override with
/// `MISTRAL_BASE_URL` to target a compatible server or a test double.
pub struct MistralClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + CHAT_COMPLETIONS_PATH).
    url: String,
}

impl MistralClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), CHAT_COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Construct from the environment:
    ///
    /// | Variable           | Default                  |
    /// |--------------------|--------------------------|
    /// | `MISTRAL_BASE_URL` | `https://api.mistral.ai` |
    pub fn from_env() -> Self {
        Self::new(Self::configured_base_url())
    }

    /// Return the configured base URL (for logging purposes).
    pub fn configured_base_url() -> String {
        std::env::var("MISTRAL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for MistralClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl ChatCompletionProvider for MistralClient {
    async fn invoke(
        &self,
        messages: &[PromptMessage],
        settings: &CompletionSettings,
        api_key: &str,
    ) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: settings.model(),
            temperature: settings.temperature(),
            messages: messages
                .iter()
                .map(|m| ApiMessage {
                    role: m.role().as_str(),
                    content: m.content(),
                })
                .collect(),
        };

        debug!(
            "MistralClient: POST {} model={} messages={}",
            self.url,
            settings.model(),
            messages.len()
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("MistralClient: API returned {status}: {body}");
            return Err(DomainError::provider(format!(
                "Mistral API returned {status}: {body}"
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::provider(format!("failed to parse response: {e}")))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::provider("response contained no choices"))?;

        choice
            .message
            .content
            .ok_or_else(|| DomainError::provider("response contained no content"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_joins_base_and_path() {
        let client = MistralClient::new("http://localhost:9000/");
        assert_eq!(client.url(), "http://localhost:9000/v1/chat/completions");
    }

    #[test]
    fn test_request_payload_shape() {
        let messages = vec![PromptMessage::system("sys"), PromptMessage::user("usr")];
        let request = ApiRequest {
            model: "mistral-large-latest",
            temperature: 0.7,
            messages: messages
                .iter()
                .map(|m| ApiMessage {
                    role: m.role().as_str(),
                    content: m.content(),
                })
                .collect(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "mistral-large-latest");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "usr");
    }
}
