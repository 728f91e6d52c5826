//! Storage error types.

use thiserror::Error;

/// Failure of a durable write or append.
///
/// Never masked: an audit append or artifact write that fails must surface
/// to the caller as a distinct storage failure, because a silently dropped
/// record would break the audit guarantee.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem-level failure (open, write, flush, create-dir).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized for persistence.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
