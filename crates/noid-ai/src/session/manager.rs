//! Session struct and the non-network operations: open, reset, attach.

use std::sync::atomic::{AtomicBool, Ordering};

use noid_common::SessionId;
use noid_config::MessagesConfig;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::attachment::Attachment;
use crate::transcript::{Transcript, Turn};
use crate::view::{ChatView, RenderRequest};
use crate::{ChatError, CompletionClient};

/// Mutable session state. Never locked across an `.await`.
#[derive(Default)]
pub(super) struct SessionState {
    pub(super) transcript: Transcript,
    pub(super) pending: Option<Attachment>,
    /// Bumped by `reset`, so an in-flight send can tell its exchange was
    /// discarded.
    pub(super) epoch: u64,
    /// Whether a greeting has been rendered since the view was last cleared.
    pub(super) greeted: bool,
}

/// A conversation with a remote completion service, bound to one view.
///
/// Construct one per chat window. All operations take `&self`; at most one
/// [`send`](Self::send) runs at a time and overlapping calls are rejected
/// with [`ChatError::Busy`].
pub struct ChatSession<C, V> {
    pub(super) id: SessionId,
    pub(super) client: C,
    pub(super) view: V,
    pub(super) messages: MessagesConfig,
    pub(super) state: Mutex<SessionState>,
    pub(super) busy: AtomicBool,
}

impl<C: CompletionClient, V: ChatView> ChatSession<C, V> {
    pub fn new(client: C, view: V, messages: MessagesConfig) -> Self {
        let id = SessionId::new();
        debug!(session = %id, "chat session created");
        Self {
            id,
            client,
            view,
            messages,
            state: Mutex::new(SessionState::default()),
            busy: AtomicBool::new(false),
        }
    }

    /// Show the welcome greeting the first time the window opens.
    pub fn open(&self) {
        let first = {
            let mut state = self.state.lock();
            !std::mem::replace(&mut state.greeted, true)
        };
        if first {
            self.view
                .render_message(RenderRequest::model(&self.messages.greeting));
        }
    }

    /// Start over: empty transcript, no attachment, cleared view.
    pub fn reset(&self) {
        {
            let mut state = self.state.lock();
            state.transcript.clear();
            state.pending = None;
            state.epoch += 1;
            state.greeted = true;
        }

        self.view.clear_all();
        self.view.clear_input();
        self.view.clear_attachment_preview();
        self.view
            .render_message(RenderRequest::model(&self.messages.reset_greeting));

        info!(session = %self.id, "chat session reset");
    }

    /// Hold `attachment` for the next send.
    ///
    /// Anything that is not declared as `image/*` is rejected: the pending
    /// attachment is cleared and the user is alerted.
    pub fn attach_image(&self, attachment: Attachment) -> Result<(), ChatError> {
        if !attachment.is_image() {
            warn!(
                session = %self.id,
                mime_type = %attachment.mime_type,
                "rejected non-image attachment"
            );
            self.state.lock().pending = None;
            self.view.alert(&self.messages.invalid_attachment);
            self.view.clear_attachment_preview();
            return Err(ChatError::InvalidAttachment {
                mime_type: attachment.mime_type,
            });
        }

        debug!(
            session = %self.id,
            name = attachment.display_name(),
            mime_type = %attachment.mime_type,
            "attachment selected"
        );
        self.view.show_attachment_preview(&attachment);
        self.state.lock().pending = Some(attachment);
        Ok(())
    }

    /// Drop the pending attachment, if any.
    pub fn detach_image(&self) {
        self.state.lock().pending = None;
        self.view.clear_attachment_preview();
    }

    // -- Getters --

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Snapshot of the acknowledged conversation.
    pub fn transcript(&self) -> Vec<Turn> {
        self.state.lock().transcript.turns().to_vec()
    }

    pub fn turn_count(&self) -> usize {
        self.state.lock().transcript.len()
    }

    pub fn has_pending_attachment(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    /// Whether a send is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}
