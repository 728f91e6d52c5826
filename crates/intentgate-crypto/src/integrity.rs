//! # Payload Integrity Verification
//!
//! Recomputes `sha256(canonical(payload))` and compares it against the
//! intention's claimed content hash. The claim may carry the `sha256:`
//! prefix or be a bare hex digest; comparison is hex-case-insensitive.
//!
//! The content hash is not secret material, so an ordinary comparison is
//! used here — constant-time comparison is reserved for the signature path.

use intentgate_core::digest::DIGEST_CLAIM_PREFIX;
use intentgate_core::{sha256_digest, CanonicalBytes, Payload};

use crate::error::VerifyError;

/// Compute the wire-form content hash claim (`sha256:<hex>`) for a payload.
///
/// This is what an honest client puts in `contentHash`.
pub fn payload_content_hash(payload: &Payload) -> Result<String, VerifyError> {
    let canonical = CanonicalBytes::new(payload)?;
    Ok(sha256_digest(&canonical).to_claim())
}

/// Verify that `claim` matches the payload's recomputed digest.
///
/// # Errors
///
/// [`VerifyError::HashMismatch`] when the digests differ. The caller (the
/// submission pipeline) is responsible for emitting the audit event; this
/// function has no side effects.
pub fn verify_content_hash(claim: &str, payload: &Payload) -> Result<(), VerifyError> {
    let canonical = CanonicalBytes::new(payload)?;
    let computed = sha256_digest(&canonical).to_hex();
    let claimed = claim.strip_prefix(DIGEST_CLAIM_PREFIX).unwrap_or(claim);
    if claimed.eq_ignore_ascii_case(&computed) {
        Ok(())
    } else {
        Err(VerifyError::HashMismatch)
    }
}
