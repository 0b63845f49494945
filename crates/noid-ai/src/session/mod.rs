//! Conversation session management.
//!
//! A `ChatSession` holds the transcript and the pending attachment, drives
//! the view, and sequences each send against the completion service.

mod manager;
mod send;
mod types;


pub use manager::ChatSession;
pub use types::SendOutcome;
