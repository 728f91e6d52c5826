//! Verification error types.

use intentgate_core::CanonicalizationError;
use thiserror::Error;

/// Outcome of a failed integrity or authenticity check.
///
/// Error messages deliberately carry no digest or MAC material — verifiers
/// report *that* a check failed, never *how close* the input was.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The payload's recomputed digest does not match the claimed
    /// `contentHash`.
    #[error("content hash does not match payload")]
    HashMismatch,

    /// The intention carries no signature (absent or empty field). Rejected
    /// before any MAC computation or comparison.
    #[error("intention carries no signature")]
    MissingSignature,

    /// The supplied signature failed verification.
    ///
    /// `structural` is true when the supplied value could not even be
    /// compared (non-hex characters, wrong length) and false for a clean
    /// constant-time comparison failure. The flag feeds the audit log
    /// only; both cases must surface to clients identically.
    #[error("signature verification failed")]
    SignatureMismatch {
        /// Whether the failure was structural rather than cryptographic.
        structural: bool,
    },

    /// Canonicalization of the value under verification failed.
    #[error(transparent)]
    Canonicalization(#[from] CanonicalizationError),
}
