//! Shared types for the NOID chat workspace: error enums and id helpers.

pub mod errors;
pub mod id;

pub use errors::{ConfigError, NoidError};
pub use id::{RequestId, SessionId};

pub type Result<T> = std::result::Result<T, NoidError>;
