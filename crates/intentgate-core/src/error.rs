//! # Error Hierarchy
//!
//! Structured error types shared across the workspace, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.

use thiserror::Error;

/// Errors during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed during canonicalization. Plain JSON values
    /// never hit this; only a failing custom `Serialize` impl can.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
