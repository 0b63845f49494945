//! Conversation engine for the NOID chat widget.
//!
//! Provides:
//! - the transcript data model (`Turn`, `Part`) and its wire format
//! - image attachments with lazy base64 encoding
//! - an HTTP client for the completion endpoint
//! - the `ChatView` rendering contract
//! - `ChatSession`, which sequences a send and rolls back on failure
//! - a Gemini client used by the relay proxy

pub mod attachment;
pub mod client;
pub mod gemini;
pub mod session;
pub mod transcript;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

use async_trait::async_trait;

pub use attachment::{Attachment, AttachmentSource};
pub use client::{CompletionReply, HttpCompletionClient};
pub use gemini::{ContentGenerator, GeminiClient, GeminiConfig, Generation, UpstreamError};
pub use session::{ChatSession, SendOutcome};
pub use transcript::{InlineData, Part, Role, Transcript, Turn};
pub use view::{ChatView, MessageHandle, RecordingView, RenderRequest, ViewEvent};

/// A remote service that answers a conversation with text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the whole conversation, last turn being the new user turn.
    async fn complete(&self, contents: &[Turn]) -> Result<CompletionReply, ChatError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("attachment must be an image, got {mime_type:?}")]
    InvalidAttachment { mime_type: String },
    #[error("failed to encode attachment: {0}")]
    AttachmentEncoding(String),
    /// Non-success status; carries the service's detail or `HTTP <status>`.
    #[error("{0}")]
    RemoteService(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("a message is already being sent")]
    Busy,
}

impl From<ChatError> for noid_common::NoidError {
    fn from(err: ChatError) -> Self {
        noid_common::NoidError::Chat(err.to_string())
    }
}
