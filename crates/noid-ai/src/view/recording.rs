//! A headless view that records every call.

use parking_lot::Mutex;

use super::{ChatView, MessageHandle, RenderRequest};
use crate::attachment::Attachment;
use crate::transcript::Role;

/// One call made on a [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Rendered {
        handle: MessageHandle,
        role: Role,
        text: String,
        image: Option<String>,
        loading: bool,
    },
    Removed(MessageHandle),
    ClearedAll,
    InputEnabled(bool),
    InputCleared,
    PreviewShown(String),
    PreviewCleared,
    Alert(String),
}

#[derive(Default)]
struct Inner {
    next_handle: u64,
    events: Vec<ViewEvent>,
    /// Messages currently on screen, in render order.
    visible: Vec<(MessageHandle, Role, String)>,
    input_enabled: bool,
}

/// Records view calls and keeps a model of what is on screen.
pub struct RecordingView {
    inner: Mutex<Inner>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                input_enabled: true,
                ..Inner::default()
            }),
        }
    }

    /// Every call received so far.
    pub fn events(&self) -> Vec<ViewEvent> {
        self.inner.lock().events.clone()
    }

    /// Texts of the messages currently visible, in order.
    pub fn visible_texts(&self) -> Vec<String> {
        self.inner
            .lock()
            .visible
            .iter()
            .map(|(_, _, text)| text.clone())
            .collect()
    }

    /// The last visible message, if any.
    pub fn last_visible(&self) -> Option<(Role, String)> {
        self.inner
            .lock()
            .visible
            .last()
            .map(|(_, role, text)| (*role, text.clone()))
    }

    pub fn input_enabled(&self) -> bool {
        self.inner.lock().input_enabled
    }
}

impl ChatView for RecordingView {
    fn render_message(&self, request: RenderRequest<'_>) -> MessageHandle {
        let mut inner = self.inner.lock();
        inner.next_handle += 1;
        let handle = MessageHandle(inner.next_handle);
        inner.visible.push((handle, request.role, request.text.to_string()));
        inner.events.push(ViewEvent::Rendered {
            handle,
            role: request.role,
            text: request.text.to_string(),
            image: request.image.map(|a| a.display_name().to_string()),
            loading: request.loading,
        });
        handle
    }

    fn remove_message(&self, handle: MessageHandle) {
        let mut inner = self.inner.lock();
        inner.visible.retain(|(h, _, _)| *h != handle);
        inner.events.push(ViewEvent::Removed(handle));
    }

    fn clear_all(&self) {
        let mut inner = self.inner.lock();
        inner.visible.clear();
        inner.events.push(ViewEvent::ClearedAll);
    }

    fn set_input_enabled(&self, enabled: bool) {
        let mut inner = self.inner.lock();
        inner.input_enabled = enabled;
        inner.events.push(ViewEvent::InputEnabled(enabled));
    }

    fn clear_input(&self) {
        self.inner.lock().events.push(ViewEvent::InputCleared);
    }

    fn show_attachment_preview(&self, attachment: &Attachment) {
        self.inner
            .lock()
            .events
            .push(ViewEvent::PreviewShown(attachment.display_name().to_string()));
    }

    fn clear_attachment_preview(&self) {
        self.inner.lock().events.push(ViewEvent::PreviewCleared);
    }

    fn alert(&self, message: &str) {
        self.inner
            .lock()
            .events
            .push(ViewEvent::Alert(message.to_string()));
    }
}
