//! Conversation data model: turns, parts and the session transcript.
//!
//! The serde representation is the wire format of the completion service:
//! a turn is `{ "role", "parts" }`, a part is either `{ "text" }` or
//! `{ "inline_data": { "mime_type", "data" } }`.

use serde::{Deserialize, Serialize};

/// Media type assumed for inline data that arrives without one.
pub const DEFAULT_INLINE_MIME_TYPE: &str = "image/jpeg";

fn default_inline_mime_type() -> String {
    DEFAULT_INLINE_MIME_TYPE.to_string()
}

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// Base64 payload plus its declared media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(default = "default_inline_mime_type")]
    pub mime_type: String,
    /// Standard-alphabet, padded base64.
    pub data: String,
}

/// One piece of a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            Part::InlineData { .. } => None,
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, Part::InlineData { .. })
    }
}

/// A single message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Turn {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Role::User,
            parts,
        }
    }

    /// A model reply always carries exactly one text part.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::text(text)],
        }
    }

    /// Concatenation of all text parts.
    pub fn text(&self) -> String {
        self.parts.iter().filter_map(Part::as_text).collect()
    }
}

/// Request body sent to the completion service: the whole transcript.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub contents: &'a [Turn],
}

/// Ordered, in-memory record of acknowledged exchanges.
///
/// Append-only, except that the most recent turn can be popped to undo a
/// failed request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Remove and return the most recently appended turn.
    pub fn pop_last(&mut self) -> Option<Turn> {
        self.turns.pop()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
