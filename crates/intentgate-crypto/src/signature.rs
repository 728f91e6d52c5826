//! # Intention Signature Verification
//!
//! HMAC-SHA256 over the intention's canonical signing form, compared with
//! `subtle::ConstantTimeEq` so verification time does not depend on where a
//! mismatch occurs.
//!
//! ## Failure collapse
//!
//! Three things can go wrong with a supplied signature: it can be absent,
//! it can be structurally uncomparable (non-hex, wrong length), or it can
//! simply be wrong. The absent case is rejected up front as
//! [`VerifyError::MissingSignature`]. The other two collapse into
//! [`VerifyError::SignatureMismatch`], distinguished only by the
//! `structural` flag the audit log records — response shape and timing
//! must not let a caller tell them apart.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use intentgate_core::Intention;

use crate::error::VerifyError;
use crate::secret::SharedSecret;

type HmacSha256 = Hmac<Sha256>;

/// Compute the hex-encoded HMAC-SHA256 signature for an intention.
///
/// Signs the canonical signing form (every field except `signature`).
/// Exposed for demo clients and tests; the gateway itself only verifies.
pub fn sign_intention(intention: &Intention, secret: &SharedSecret) -> Result<String, VerifyError> {
    let canonical = intention.canonical_signing_bytes()?;
    // HMAC-SHA256 accepts keys of any length; new_from_slice cannot fail.
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(canonical.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Verify an intention's signature against the shared secret.
///
/// # Errors
///
/// - [`VerifyError::MissingSignature`] when the signature field is absent
///   or empty, before any comparison is attempted.
/// - [`VerifyError::SignatureMismatch`] for every other failure: non-hex
///   input and wrong-length input (`structural: true`) as well as a clean
///   comparison failure (`structural: false`).
pub fn verify_intention_signature(
    intention: &Intention,
    secret: &SharedSecret,
) -> Result<(), VerifyError> {
    let supplied = match intention.signature.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => return Err(VerifyError::MissingSignature),
    };

    let canonical = intention.canonical_signing_bytes()?;
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(canonical.as_bytes());
    let expected = mac.finalize().into_bytes();

    let supplied_raw = match hex::decode(supplied) {
        Ok(bytes) => bytes,
        Err(_) => return Err(VerifyError::SignatureMismatch { structural: true }),
    };
    if supplied_raw.len() != expected.len() {
        return Err(VerifyError::SignatureMismatch { structural: true });
    }

    if bool::from(expected.as_slice().ct_eq(&supplied_raw)) {
        Ok(())
    } else {
        Err(VerifyError::SignatureMismatch { structural: false })
    }
}
