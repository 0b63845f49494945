//! Google Gemini client used by the relay proxy.
//!
//! Forwards a whole transcript to the Generative Language API
//! `generateContent` method and reduces the answer to plain text.

mod api;
mod client;
mod config;


pub use client::GeminiClient;
pub use config::GeminiConfig;

use async_trait::async_trait;

use crate::transcript::Turn;

/// Tokens reported by the upstream for one call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Result of one upstream call. `text` is `None` when the model produced
/// no text, e.g. when the prompt was blocked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    pub text: Option<String>,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// The API answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to parse upstream response: {0}")]
    Parse(String),
    #[error("configuration error: {0}")]
    Config(String),
}

/// Something that can answer a conversation, typically [`GeminiClient`].
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, contents: &[Turn]) -> Result<Generation, UpstreamError>;
}
