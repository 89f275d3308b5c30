use anyhow::Result;

use crate::ChatRequest;

use super::super::Container;

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn chat(&self, query: String, context: String, api_key: String) -> Result<String> {
        let request = ChatRequest::new(api_key, query, context);
        let use_case = self.container.chat_use_case();
        let response = use_case.execute(&request).await?;
        Ok(response.into_response_text())
    }
}
