//! Remote completion service clients.

mod http;

#[cfg(test)]
mod tests;

pub use http::{error_detail, parse_reply, HttpCompletionClient};

use std::sync::Arc;

use async_trait::async_trait;

use crate::transcript::Turn;
use crate::{ChatError, CompletionClient};

/// What the service answered. `text` is `None` when the reply carried no
/// usable text, which is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionReply {
    pub text: Option<String>,
}

impl CompletionReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for Arc<T> {
    async fn complete(&self, contents: &[Turn]) -> Result<CompletionReply, ChatError> {
        (**self).complete(contents).await
    }
}
