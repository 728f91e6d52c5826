//! # Content Digests
//!
//! SHA-256 digest computation over [`CanonicalBytes`].
//!
//! ## Invariant
//!
//! [`sha256_digest`] requires `&CanonicalBytes`, not raw `&[u8]`. Every
//! digest in the system was therefore computed from properly canonicalized
//! data — there is no way to hash a divergent serialization by accident.

use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// Prefix carried by content hash claims on the wire.
pub const DIGEST_CLAIM_PREFIX: &str = "sha256:";

/// A SHA-256 content digest.
///
/// Displays (and serializes into claims) as `sha256:<64 lowercase hex>`,
/// the format submitting clients put in `contentHash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Return the digest as a lowercase hex string (64 chars, no prefix).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Return the digest in wire claim form: `sha256:<hex>`.
    pub fn to_claim(&self) -> String {
        format!("{DIGEST_CLAIM_PREFIX}{}", self.to_hex())
    }

    /// Access the raw 32-byte digest value.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{DIGEST_CLAIM_PREFIX}{}", self.to_hex())
    }
}

/// Compute a SHA-256 content digest from canonical bytes.
///
/// This is the single digest computation path in the workspace. The input
/// must be [`CanonicalBytes`] — raw byte slices are not accepted.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    ContentDigest(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn digest_is_64_hex_chars() {
        let canonical = CanonicalBytes::new(&json!({"key": "value"})).unwrap();
        let digest = sha256_digest(&canonical);
        assert_eq!(digest.to_hex().len(), 64);
        assert!(digest.to_hex().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn digest_is_deterministic() {
        let canonical = CanonicalBytes::new(&json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(sha256_digest(&canonical), sha256_digest(&canonical));
    }

    #[test]
    fn different_input_different_digest() {
        let c1 = CanonicalBytes::new(&json!({"x": 1})).unwrap();
        let c2 = CanonicalBytes::new(&json!({"x": 2})).unwrap();
        assert_ne!(sha256_digest(&c1), sha256_digest(&c2));
    }

    #[test]
    fn claim_form_carries_prefix() {
        let canonical = CanonicalBytes::new(&json!({"t": "x"})).unwrap();
        let digest = sha256_digest(&canonical);
        let claim = digest.to_claim();
        assert!(claim.starts_with("sha256:"));
        assert_eq!(claim.len(), "sha256:".len() + 64);
        assert_eq!(claim, digest.to_string());
    }

    #[test]
    fn known_vector() {
        // sha256 of the literal bytes `"hello"` (a canonical JSON string).
        let canonical = CanonicalBytes::new(&"hello").unwrap();
        assert_eq!(canonical.as_bytes(), b"\"hello\"");
        let digest = sha256_digest(&canonical);
        assert_eq!(
            digest.to_hex(),
            "5aa762ae383fbb727af3c7a36d4940a5b8c40a989452d2304fc958ff3f354e7a"
        );
    }
}
