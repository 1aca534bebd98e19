//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in mailbox operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Operation referenced a message id absent from the target collection.
    #[error("Message not found: {0}")]
    MessageNotFound(String),

    /// Folder identifier outside the closed folder set.
    #[error("Invalid folder: {0}")]
    InvalidFolder(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
