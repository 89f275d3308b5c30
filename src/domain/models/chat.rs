use serde::{Deserialize, Deserializer, Serialize};

/// A single question asked against caller-supplied context.
///
/// A request whose `api_key` is absent or `null` deserializes with an empty
/// key, so "missing" and "empty" are rejected the same way by the chat use case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    api_key: String,
    query: String,
    context: String,
}

impl ChatRequest {
    pub fn new(
        api_key: impl Into<String>,
        query: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            query: query.into(),
            context: context.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    status_code: u16,
    response: String,
}

impl ChatResponse {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            response: response.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn into_response_text(self) -> String {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_api_key_deserializes_empty() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"query": "x", "context": "y"}"#).unwrap();
        assert_eq!(req.api_key(), "");
        assert!(!req.has_credentials());
    }

    #[test]
    fn test_request_with_null_api_key_deserializes_empty() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"api_key": null, "query": "x", "context": "y"}"#).unwrap();
        assert_eq!(req.api_key(), "");
        assert!(!req.has_credentials());
    }

    #[test]
    fn test_request_requires_query_and_context() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"api_key": "k", "query": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_serializes_wire_field_names() {
        let resp = ChatResponse::ok("hello");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status_code": 200, "response": "hello"})
        );
    }
}
