//! Error types for the pulsefeed core.

use crate::state::Collection;
use thiserror::Error;

/// The main error type for pulsefeed.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (config file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Remote provider errors (rejected or timed-out collection fetch)
    #[error("provider error: {0}")]
    Provider(String),

    /// Unexpected response envelope or undeserializable records
    #[error("malformed {collection} response: {detail}")]
    MalformedResponse {
        collection: Collection,
        detail: String,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new malformed-response error.
    pub fn malformed(collection: Collection, detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            collection,
            detail: detail.into(),
        }
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error is recoverable (the next poll tick retries).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Provider(_) | Self::MalformedResponse { .. })
    }
}
