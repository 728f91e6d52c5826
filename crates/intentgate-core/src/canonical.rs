//! # Canonical Serialization — Order-Preserving Byte Production
//!
//! This module defines `CanonicalBytes`, the sole construction path for
//! bytes used in digest computation and signature input across the gateway.
//!
//! ## Invariant
//!
//! The `CanonicalBytes` newtype has a private inner field. The only way to
//! construct it is through `CanonicalBytes::new()`, which serializes the
//! value as compact JSON (no whitespace) **without reordering object keys**.
//! Any function that hashes or signs must accept `&CanonicalBytes`, so the
//! "wrong serialization path" defect class is structurally impossible.
//!
//! ## Why order-preserving
//!
//! Submitting clients sign the compact serialization of the value exactly as
//! they built it. The gateway must reproduce those bytes from the parsed
//! value, so object keys keep the order they arrived in (`serde_json` is
//! built with `preserve_order`) and typed records serialize in their declared
//! field order. Sorting keys here would break every client signature.

use serde::Serialize;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by compact, order-preserving JSON
/// serialization.
///
/// # Invariants
///
/// - The only constructor is [`CanonicalBytes::new()`].
/// - Output is compact JSON: no spaces, no trailing whitespace.
/// - Object keys appear in the order the value carries them; no reordering.
/// - The same value always produces identical bytes, across calls and
///   across processes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// This is the ONLY way to construct `CanonicalBytes`. All digest and
    /// signature computation in the workspace must flow through here.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::SerializationFailed`] if the value's
    /// `Serialize` impl fails. Plain JSON values never fail.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let bytes = serde_json::to_vec(obj)?;
        Ok(Self(bytes))
    }

    /// Access the canonical bytes for digest or MAC computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
