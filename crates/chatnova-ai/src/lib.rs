//! Chat engine for chatnova.
//!
//! Provides the Gemini Generative Language API client, the conversation
//! session with its append-only turn history, and the error taxonomy
//! shared with the terminal frontend.

pub mod gemini;
pub mod session;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_MODEL};
pub use session::Session;

/// A chat backend: turns a conversation history into one reply.
///
/// `Session` only talks to this trait, so tests can substitute a
/// scripted backend for the real HTTP client.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn generate(&self, history: &[Message]) -> Result<String, ChatError>;
}

/// One conversation turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Who produced a turn. Serialized lowercase to match the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The server answered with a non-2xx status or an error envelope.
    /// Carries the server-provided message.
    #[error("API error: {0}")]
    Api(String),

    /// DNS, TCP, TLS, or timeout failure before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the JSON shape we expect.
    #[error("parse error: {0}")]
    Parse(String),
}
