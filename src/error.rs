//! Error types for Mentor Bot.

use std::time::Duration;

/// Persistence adapter errors.
///
/// These never reach the user: the store converts them into defaults and
/// log lines. They exist so the adapter can distinguish a missing document
/// from a corrupt one.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether this error means the document simply does not exist yet.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Oracle gateway errors.
///
/// Always rendered into chat text by the mentor; never aborts message
/// handling.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("Failed to invoke model process: {0}")]
    Invocation(#[from] std::io::Error),

    #[error("Model process exited with an error: {stderr}")]
    ProcessFailed { stderr: String },

    #[error("Model did not answer within {0:?}")]
    Timeout(Duration),
}

/// Channel-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel {name} failed to start: {reason}")]
    StartupFailed { name: String, reason: String },

    #[error("Failed to send response on channel {name}: {reason}")]
    SendFailed { name: String, reason: String },
}
