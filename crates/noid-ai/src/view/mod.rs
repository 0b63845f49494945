//! The rendering collaborator of a chat session.
//!
//! The session never touches the screen itself: it asks a [`ChatView`] to
//! render and remove messages, toggle the input, and show the attachment
//! preview. Replies are handed over as opaque text; any markdown rendering
//! is the view's business.

mod recording;

pub use recording::{RecordingView, ViewEvent};

use crate::attachment::Attachment;
use crate::transcript::Role;

/// Opaque id of a rendered message, used to remove it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHandle(pub u64);

/// One message to put on screen.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub role: Role,
    pub text: &'a str,
    /// Attachment shown alongside the text (outgoing user messages only).
    pub image: Option<&'a Attachment>,
    /// Render as a progress indicator rather than content.
    pub loading: bool,
}

impl<'a> RenderRequest<'a> {
    pub fn user(text: &'a str, image: Option<&'a Attachment>) -> Self {
        Self {
            role: Role::User,
            text,
            image,
            loading: false,
        }
    }

    pub fn model(text: &'a str) -> Self {
        Self {
            role: Role::Model,
            text,
            image: None,
            loading: false,
        }
    }

    pub fn loading(label: &'a str) -> Self {
        Self {
            role: Role::Model,
            text: label,
            image: None,
            loading: true,
        }
    }
}

/// Capabilities a chat session needs from its front-end.
///
/// Methods take `&self`; implementations keep their own interior state.
pub trait ChatView: Send + Sync {
    /// Append a message and return a handle to it.
    fn render_message(&self, request: RenderRequest<'_>) -> MessageHandle;

    /// Remove a previously rendered message. Unknown handles are ignored.
    fn remove_message(&self, handle: MessageHandle);

    /// Remove every rendered message.
    fn clear_all(&self);

    fn set_input_enabled(&self, enabled: bool);

    /// Empty the text input box.
    fn clear_input(&self);

    fn show_attachment_preview(&self, attachment: &Attachment);

    fn clear_attachment_preview(&self);

    /// Blocking user notification, e.g. for a rejected file.
    fn alert(&self, message: &str);
}
