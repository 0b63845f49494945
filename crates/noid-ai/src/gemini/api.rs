//! ContentGenerator implementation for GeminiClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::transcript::Turn;

use super::client::{upstream_error_message, GeminiClient};
use super::{ContentGenerator, Generation, UpstreamError};

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, contents: &[Turn]) -> Result<Generation, UpstreamError> {
        let body = self.build_request_body(contents);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = contents.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = upstream_error_message(status.as_u16(), &text);
            warn!(status = status.as_u16(), %message, "Gemini API error");
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let json: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| UpstreamError::Parse(e.to_string()))?;
        let generation = self.parse_response(json)?;

        debug!(
            input_tokens = generation.usage.input_tokens,
            output_tokens = generation.usage.output_tokens,
            has_text = generation.text.is_some(),
            "Gemini API response"
        );
        Ok(generation)
    }
}
