//! Shared secret handling.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// The gateway's shared authentication secret.
///
/// Wraps the raw key bytes so they are zeroized on drop and never appear in
/// `Debug` output or logs. HMAC-SHA256 accepts keys of any length; no size
/// constraint is enforced here.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(Vec<u8>);

impl SharedSecret {
    /// Wrap raw secret bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Access the raw key bytes for MAC computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for SharedSecret {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}
