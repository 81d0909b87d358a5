//! Google Gemini API client.
//!
//! Implements the `ChatClient` trait via the Generative Language API's
//! `generateContent` method.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::{GeminiConfig, DEFAULT_MODEL};
