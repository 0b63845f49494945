//! Gemini API client struct, request building, and response parsing.

use serde_json::{json, Value};

use crate::transcript::{Part, Role, Turn};

use super::config::GeminiConfig;
use super::{Generation, TokenUsage, UpstreamError};

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstreamError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.config.base_url, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    ///
    /// Turns left without parts are skipped; the API rejects them.
    pub(crate) fn build_request_body(&self, turns: &[Turn]) -> Value {
        let contents: Vec<Value> = turns
            .iter()
            .filter(|turn| !turn.parts.is_empty())
            .map(|turn| {
                let role = match turn.role {
                    Role::User => "user",
                    Role::Model => "model",
                };
                let parts: Vec<Value> = turn.parts.iter().map(upstream_part).collect();
                json!({ "role": role, "parts": parts })
            })
            .collect();

        let mut body = json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if let Some(system) = &self.config.system_instruction {
            body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
        }

        body
    }

    /// Parse a Gemini response.
    ///
    /// Text parts of the first candidate are joined. A response without
    /// candidates, or without any text, yields `text: None`.
    pub(crate) fn parse_response(&self, json: Value) -> Result<Generation, UpstreamError> {
        if !json.is_object() {
            return Err(UpstreamError::Parse("response is not a JSON object".into()));
        }

        let text: String = json["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|first| first["content"]["parts"].as_array())
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
            .unwrap_or_default();

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(Generation {
            text: (!text.is_empty()).then_some(text),
            usage,
        })
    }
}

fn upstream_part(part: &Part) -> Value {
    match part {
        Part::Text { text } => json!({ "text": text }),
        Part::InlineData { inline_data } => json!({
            "inlineData": {
                "mimeType": inline_data.mime_type,
                "data": inline_data.data,
            }
        }),
    }
}

/// Human-readable message for a failed call: `STATUS: message` from the
/// API's `{"error": {...}}` envelope, or the raw body.
pub(crate) fn upstream_error_message(status: u16, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let error = parsed.as_ref().map(|v| &v["error"]);
    let message = error.and_then(|e| e["message"].as_str());
    let status_text = error.and_then(|e| e["status"].as_str()).unwrap_or_default();

    match message {
        Some(msg) if status_text.is_empty() => format!("{status} {msg}"),
        Some(msg) => format!("{status} {status_text}: {msg}"),
        None if body.trim().is_empty() => format!("HTTP {status}"),
        None => format!("{status} {}", body.trim()),
    }
}
