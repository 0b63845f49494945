//! Relay proxy configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROXY_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const DEFAULT_SYSTEM_PROMPT: &str = "You are an AI assistant named AI-NOID. Answer the user's \
questions in a friendly way and feel free to use emoji. If a question has no answer, reply with \
\"Sorry, I can't answer that question.\" If asked what MARS is, answer: MARS (Multimodal \
AI-Powered Furniture Recommender System) is a smart application that recommends furniture \
products accurately based on the user's question. Users can provide text or an image to find \
matching products. MARS recognizes products by type, color and material and gives \
recommendations based on the room the user describes. Do not answer questions that are not \
related to furniture.";

/// Settings for the `noid-proxy` relay server and its upstream model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Socket address the proxy listens on.
    pub bind: String,
    pub model: String,
    /// Base URL of the Generative Language API models collection.
    pub api_base: String,
    pub system_prompt: String,
    /// Valid range: 1-65536.
    pub max_output_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Upstream request timeout in seconds (valid range: 1-600).
    pub upstream_timeout_secs: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8001".into(),
            model: DEFAULT_PROXY_MODEL.into(),
            api_base: DEFAULT_GEMINI_API_BASE.into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            max_output_tokens: 4096,
            temperature: 0.7,
            upstream_timeout_secs: 120,
        }
    }
}
