//! User-visible strings rendered by the chat session.

use serde::{Deserialize, Serialize};

/// Fixed texts the session hands to the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Shown the first time the chat window opens.
    pub greeting: String,
    /// Shown after the session is reset.
    pub reset_greeting: String,
    /// Label of the loading placeholder while a request is in flight.
    pub loading: String,
    /// Substituted when the service replies without any text.
    pub no_reply: String,
    /// Prepended to the failure detail of a failed send.
    pub error_prefix: String,
    /// Rendered when the attachment cannot be read or encoded.
    pub attachment_failed: String,
    /// Alert for a selected file that is not an image.
    pub invalid_attachment: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            greeting: "Hi! I'm the AI-NOID Assistant. How can I help you today?".into(),
            reset_greeting: "A new chat session has started. Ask away!".into(),
            loading: "Processing".into(),
            no_reply: "⚠️ No text response from the proxy.".into(),
            error_prefix: "⚠️ An error occurred: ".into(),
            attachment_failed: "⚠️ Failed to process the image.".into(),
            invalid_attachment: "The uploaded file must be an image.".into(),
        }
    }
}
