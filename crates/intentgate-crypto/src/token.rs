//! Submission token generation.

use rand_core::{OsRng, RngCore};
use serde::{Deserialize, Serialize};

/// Number of random bytes in a token (12 hex chars on the wire).
const TOKEN_BYTES: usize = 6;

/// Opaque identifier for quarantine entries and published records.
///
/// Generated from 6 bytes of OS randomness, hex-encoded. Uniqueness is a
/// probabilistic guarantee, not an enforced invariant: 48 bits of entropy
/// make a collision over a process lifetime negligible, and no collision
/// check is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionToken(String);

impl SubmissionToken {
    /// Generate a fresh random token.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, yielding the inner string (store key form).
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
