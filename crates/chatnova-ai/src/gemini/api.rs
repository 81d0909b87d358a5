//! ChatClient trait implementation for GeminiClient (the actual POST).

use async_trait::async_trait;
use tracing::debug;

use crate::{ChatClient, ChatError, Message};

use super::client::{error_message, GeminiClient};

#[async_trait]
impl ChatClient for GeminiClient {
    async fn generate(&self, history: &[Message]) -> Result<String, ChatError> {
        let body = self.build_request_body(history);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = history.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .map(|json| error_message(&json))
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChatError::Api(message));
        }

        let json: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ChatError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}
