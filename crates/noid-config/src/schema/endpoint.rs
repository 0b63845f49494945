//! Remote completion endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where the chat front-end posts its transcript.
pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:8001/generate";

/// Connection settings for the completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub url: String,
    /// TCP connect timeout in seconds (valid range: 1-300).
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds; 0 waits for the service indefinitely.
    pub request_timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 0,
        }
    }
}
