//! Gemini API client struct, request building, and response parsing.

use crate::{ChatError, Message};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { config, http }
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.config.api_base, self.config.model, self.config.api_key
        )
    }

    /// Build the JSON request body: the full history, in order.
    pub(crate) fn build_request_body(&self, history: &[Message]) -> serde_json::Value {
        let contents: Vec<_> = history
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role.as_str(),
                    "parts": [{ "text": msg.text }]
                })
            })
            .collect();

        serde_json::json!({ "contents": contents })
    }

    /// Extract the first candidate's text from a 200 response body.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, ChatError> {
        // Some API failures come back as 200 with an error envelope.
        if json.get("error").is_some() {
            return Err(ChatError::Api(error_message(&json)));
        }

        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| ChatError::Parse("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| ChatError::Parse("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .ok_or_else(|| ChatError::Parse("candidate has no parts".to_string()))?;

        let mut text = String::new();
        for part in parts {
            if let Some(t) = part["text"].as_str() {
                text.push_str(t);
            }
        }

        Ok(text)
    }
}

/// The server's `error.message`, or "Unknown error" when it gave none.
pub(crate) fn error_message(json: &serde_json::Value) -> String {
    json["error"]["message"]
        .as_str()
        .unwrap_or("Unknown error")
        .to_string()
}
