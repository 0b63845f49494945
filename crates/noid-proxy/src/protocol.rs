//! HTTP wire types of the relay proxy and conversion of incoming parts.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use noid_ai::transcript::{Part, Role, Turn, DEFAULT_INLINE_MIME_TYPE};

use crate::error::ProxyError;

/// `POST /generate` body: the whole conversation.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub contents: Vec<IncomingTurn>,
}

/// A turn as sent by the widget. Parts stay loosely typed so unknown
/// shapes can be skipped instead of failing the request.
#[derive(Debug, Deserialize)]
pub struct IncomingTurn {
    pub role: Role,
    pub parts: Vec<Value>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl GenerateRequest {
    /// Convert to upstream turns.
    ///
    /// Empty text parts and parts of unknown shape are dropped. Inline data
    /// must decode as base64; its media type defaults to `image/jpeg`.
    pub fn into_turns(self) -> Result<Vec<Turn>, ProxyError> {
        self.contents
            .into_iter()
            .map(|turn| {
                let mut parts = Vec::with_capacity(turn.parts.len());
                for part in &turn.parts {
                    if let Some(part) = convert_part(part)? {
                        parts.push(part);
                    }
                }
                Ok(Turn {
                    role: turn.role,
                    parts,
                })
            })
            .collect()
    }
}

fn convert_part(part: &Value) -> Result<Option<Part>, ProxyError> {
    if let Some(text) = part.get("text").and_then(Value::as_str) {
        if !text.is_empty() {
            return Ok(Some(Part::text(text)));
        }
    }

    match part.get("inline_data") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(inline)) => {
            let data = inline
                .get("data")
                .and_then(Value::as_str)
                .ok_or(ProxyError::InvalidInlineData)?;
            let mime_type = inline
                .get("mime_type")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_INLINE_MIME_TYPE);
            let bytes = BASE64_STANDARD
                .decode(data.trim())
                .map_err(|_| ProxyError::InvalidInlineData)?;
            Ok(Some(Part::inline(mime_type, BASE64_STANDARD.encode(bytes))))
        }
        Some(_) => Err(ProxyError::InvalidInlineData),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(body: Value) -> GenerateRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn text_parts_pass_through_and_empty_ones_drop() {
        let turns = request(json!({
            "contents": [
                { "role": "user", "parts": [{ "text": "" }, { "text": "hello" }] },
                { "role": "model", "parts": [{ "text": "Hi there" }] }
            ]
        }))
        .into_turns()
        .unwrap();

        assert_eq!(turns[0], Turn::user(vec![Part::text("hello")]));
        assert_eq!(turns[1], Turn::model("Hi there"));
    }

    #[test]
    fn inline_data_defaults_to_jpeg() {
        let turns = request(json!({
            "contents": [{ "role": "user", "parts": [{ "inline_data": { "data": "iVBORw==" } }] }]
        }))
        .into_turns()
        .unwrap();

        assert_eq!(turns[0].parts, vec![Part::inline("image/jpeg", "iVBORw==")]);
    }

    #[test]
    fn inline_data_keeps_declared_type() {
        let turns = request(json!({
            "contents": [{
                "role": "user",
                "parts": [{ "inline_data": { "mime_type": "image/png", "data": "iVBORw==" } }]
            }]
        }))
        .into_turns()
        .unwrap();

        assert_eq!(turns[0].parts, vec![Part::inline("image/png", "iVBORw==")]);
    }

    #[test]
    fn invalid_inline_data_is_rejected() {
        for part in [
            json!({ "inline_data": { "data": "not base64!!" } }),
            json!({ "inline_data": { "mime_type": "image/png" } }),
            json!({ "inline_data": "iVBORw==" }),
        ] {
            let result = request(json!({ "contents": [{ "role": "user", "parts": [part] }] }))
                .into_turns();
            assert!(matches!(result, Err(ProxyError::InvalidInlineData)));
        }
    }

    #[test]
    fn unknown_parts_are_skipped() {
        let turns = request(json!({
            "contents": [{ "role": "user", "parts": [{ "file_data": {} }, { "inline_data": null }] }]
        }))
        .into_turns()
        .unwrap();

        assert!(turns[0].parts.is_empty());
    }

    #[test]
    fn unknown_role_fails_to_deserialize() {
        let result = serde_json::from_value::<GenerateRequest>(json!({
            "contents": [{ "role": "system", "parts": [] }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn turn_without_parts_fails_to_deserialize() {
        let result = serde_json::from_value::<GenerateRequest>(json!({
            "contents": [{ "role": "user" }]
        }));
        assert!(result.is_err());
    }
}
