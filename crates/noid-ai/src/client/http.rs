//! HTTP client for the completion endpoint (`POST { contents }` → `{ text }`).

use std::time::Duration;

use async_trait::async_trait;
use noid_config::EndpointConfig;
use tracing::debug;

use super::CompletionReply;
use crate::transcript::{CompletionRequest, Turn};
use crate::{ChatError, CompletionClient};

/// Posts the full transcript to a fixed endpoint URL.
pub struct HttpCompletionClient {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpCompletionClient {
    /// Client with a 10s connect timeout and no overall request timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ChatError> {
        Self::from_config(&EndpointConfig {
            url: endpoint.into(),
            ..EndpointConfig::default()
        })
    }

    pub fn from_config(config: &EndpointConfig) -> Result<Self, ChatError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        let http = builder
            .build()
            .map_err(|e| ChatError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: config.url.clone(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, contents: &[Turn]) -> Result<CompletionReply, ChatError> {
        debug!(endpoint = %self.endpoint, turns = contents.len(), "completion request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&CompletionRequest { contents })
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::RemoteService(error_detail(
                status.as_u16(),
                &body,
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        parse_reply(&body)
    }
}

/// Failure detail of a non-success response.
///
/// Uses the body's `detail` field when present; a non-string detail (such
/// as a list of validation errors) is passed through as JSON. Anything else
/// falls back to `HTTP <status>`.
pub fn error_detail(status: u16, body: &str) -> String {
    let fallback = || format!("HTTP {status}");
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return fallback();
    };

    match value.get("detail") {
        Some(serde_json::Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(serde_json::Value::String(_)) | Some(serde_json::Value::Null) | None => fallback(),
        Some(other) => other.to_string(),
    }
}

/// Parse a success body. The body must be JSON; a missing, null, empty or
/// non-string `text` means "no reply".
pub fn parse_reply(body: &str) -> Result<CompletionReply, ChatError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ChatError::Parse(e.to_string()))?;

    let text = value
        .get("text")
        .and_then(serde_json::Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Ok(CompletionReply { text })
}
