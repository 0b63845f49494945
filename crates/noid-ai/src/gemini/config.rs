//! Gemini API client configuration.

use std::time::Duration;

use noid_config::schema::{DEFAULT_GEMINI_API_BASE, DEFAULT_PROXY_MODEL};
use noid_config::ProxyConfig;

use super::UpstreamError;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// Models collection URL, without a trailing slash.
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub system_instruction: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("system_instruction", &self.system_instruction.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_PROXY_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_API_BASE.to_string(),
            max_tokens: 4096,
            temperature: 0.7,
            system_instruction: None,
            timeout: Duration::from_secs(120),
        }
    }

    /// Read the API key from `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self, UpstreamError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(UpstreamError::Config(format!("{API_KEY_ENV} is not set"))),
        }
    }

    /// Apply the `[proxy]` section of the config file.
    pub fn with_proxy_config(self, proxy: &ProxyConfig) -> Self {
        let mut config = self
            .with_model(&proxy.model)
            .with_base_url(&proxy.api_base)
            .with_max_tokens(proxy.max_output_tokens)
            .with_temperature(proxy.temperature)
            .with_timeout(Duration::from_secs(proxy.upstream_timeout_secs));
        let system = proxy.system_prompt.trim();
        config.system_instruction = (!system.is_empty()).then(|| system.to_string());
        config
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
