//! The send routine: build the user turn, call the service, record or roll back.

use tracing::{debug, info, warn};

use super::manager::ChatSession;
use super::types::{FlightGuard, SendOutcome};
use crate::transcript::{Part, Turn};
use crate::view::{ChatView, RenderRequest};
use crate::{ChatError, CompletionClient};

impl<C: CompletionClient, V: ChatView> ChatSession<C, V> {
    /// Send `text` plus the pending attachment, if any, and render the reply.
    ///
    /// The whole transcript goes out with every request. On success the
    /// user turn and a model turn holding the reply are both kept; on any
    /// failure the user turn is popped again, so the transcript only ever
    /// holds acknowledged exchanges. Errors are rendered in the view before
    /// they are returned. Input is re-enabled on every path.
    pub async fn send(&self, text: &str) -> Result<SendOutcome, ChatError> {
        let text = text.trim();
        if text.is_empty() && !self.has_pending_attachment() {
            return Ok(SendOutcome::Skipped);
        }

        let mut flight = FlightGuard::acquire(&self.busy)?;

        let (attachment, epoch) = {
            let mut state = self.state.lock();
            (state.pending.take(), state.epoch)
        };
        // The attachment may have been detached since the check above.
        if text.is_empty() && attachment.is_none() {
            return Ok(SendOutcome::Skipped);
        }

        self.view.clear_input();
        self.view.clear_attachment_preview();
        self.view
            .render_message(RenderRequest::user(text, attachment.as_ref()));
        flight.disable_input(&self.view);
        let placeholder = self
            .view
            .render_message(RenderRequest::loading(&self.messages.loading));

        let mut parts = Vec::with_capacity(2);
        if !text.is_empty() {
            parts.push(Part::text(text));
        }
        if let Some(attachment) = &attachment {
            match attachment.to_part().await {
                Ok(part) => parts.push(part),
                Err(err) => {
                    warn!(session = %self.id, error = %err, "attachment encoding failed");
                    self.view.remove_message(placeholder);
                    self.view
                        .render_message(RenderRequest::model(&self.messages.attachment_failed));
                    return Err(err);
                }
            }
        }

        let contents = {
            let mut state = self.state.lock();
            if state.epoch != epoch {
                drop(state);
                self.view.remove_message(placeholder);
                return Ok(SendOutcome::Abandoned);
            }
            state.transcript.push(Turn::user(parts));
            state.transcript.turns().to_vec()
        };

        debug!(session = %self.id, turns = contents.len(), "sending transcript");
        let result = self.client.complete(&contents).await;
        self.view.remove_message(placeholder);

        match result {
            Ok(reply) => {
                let reply_text = reply
                    .text
                    .unwrap_or_else(|| self.messages.no_reply.clone());
                {
                    let mut state = self.state.lock();
                    if state.epoch != epoch {
                        return Ok(SendOutcome::Abandoned);
                    }
                    state.transcript.push(Turn::model(reply_text.clone()));
                }
                self.view.render_message(RenderRequest::model(&reply_text));
                info!(session = %self.id, reply_len = reply_text.len(), "reply received");
                Ok(SendOutcome::Replied { text: reply_text })
            }
            Err(err) => {
                {
                    let mut state = self.state.lock();
                    if state.epoch != epoch {
                        return Ok(SendOutcome::Abandoned);
                    }
                    state.transcript.pop_last();
                }
                warn!(session = %self.id, error = %err, "send failed, user turn rolled back");
                let message = format!("{}{err}", self.messages.error_prefix);
                self.view.render_message(RenderRequest::model(&message));
                Err(err)
            }
        }
    }
}
