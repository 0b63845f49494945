//! Session result types and the in-flight guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::view::ChatView;
use crate::ChatError;

/// How a `send` call ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing to send: blank text and no pending attachment.
    Skipped,
    /// The service answered; `text` is what was rendered and recorded.
    Replied { text: String },
    /// The session was reset while the request was in flight; the exchange
    /// was dropped without touching the new transcript.
    Abandoned,
}

/// Marks a send as in flight. Dropping it clears the `busy` flag and, if
/// input was disabled through it, re-enables input, even when the future is
/// cancelled or an early return occurs.
pub(crate) struct FlightGuard<'a, V: ChatView> {
    flag: &'a AtomicBool,
    view: Option<&'a V>,
}

impl<'a, V: ChatView> FlightGuard<'a, V> {
    /// Attempt to take the busy flag. Returns `ChatError::Busy` if taken.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, ChatError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(ChatError::Busy);
        }
        Ok(Self { flag, view: None })
    }

    /// Disable the view's input until this guard drops.
    pub(crate) fn disable_input(&mut self, view: &'a V) {
        view.set_input_enabled(false);
        self.view = Some(view);
    }
}

impl<V: ChatView> Drop for FlightGuard<'_, V> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        if let Some(view) = self.view {
            view.set_input_enabled(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RecordingView;

    #[test]
    fn second_acquire_is_busy() {
        let flag = AtomicBool::new(false);
        let _first = FlightGuard::<RecordingView>::acquire(&flag).unwrap();
        let second = FlightGuard::<RecordingView>::acquire(&flag);
        assert!(matches!(second, Err(ChatError::Busy)));
    }

    #[test]
    fn drop_releases_flag_and_input() {
        let flag = AtomicBool::new(false);
        let view = RecordingView::new();
        {
            let mut guard = FlightGuard::acquire(&flag).unwrap();
            guard.disable_input(&view);
            assert!(!view.input_enabled());
            assert!(flag.load(Ordering::Acquire));
        }
        assert!(view.input_enabled());
        assert!(!flag.load(Ordering::Acquire));
    }
}
