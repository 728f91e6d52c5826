//! # The Intention Record
//!
//! An intention is the signed, hash-bound metadata record accompanying a
//! content payload: it asserts who submitted what, binds the payload by
//! content digest, and authenticates the whole record with an HMAC
//! signature over its canonical form.
//!
//! ## Signing form
//!
//! The authenticated bytes of an intention are the canonical serialization
//! of [`SigningView`] — the record with the `signature` field removed, in
//! declared wire field order (`intent`, `contentHash`, `clientId`,
//! `createdAt`). Clients sign exactly these bytes; the gateway reconstructs
//! them from the parsed record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::canonical::CanonicalBytes;
use crate::error::CanonicalizationError;

/// An opaque content payload.
///
/// The gateway never interprets payload structure; it is consumed only as
/// canonical bytes for hashing and stored verbatim. `serde_json` is built
/// with `preserve_order`, so the payload's key order survives parsing and
/// re-serialization — a requirement for reproducing the client's hashed
/// bytes.
pub type Payload = Value;

/// Signed, hash-bound metadata record accompanying a payload.
///
/// Wire field names are camelCase. Field declaration order is the wire
/// order, which is also the signing order — do not reorder fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intention {
    /// Client-chosen name for the submission (e.g. `"publish_post"`).
    pub intent: String,
    /// Claimed payload digest: `sha256:<hex>` (bare hex also accepted on
    /// verification).
    pub content_hash: String,
    /// Identifier of the submitting client.
    pub client_id: String,
    /// Client-reported creation time. Informational only — never validated
    /// against clock skew, and kept verbatim as a string so the signing
    /// bytes reproduce exactly what the client serialized.
    pub created_at: String,
    /// Hex-encoded HMAC-SHA256 over the canonical signing form. Absent or
    /// empty means the submission is rejected before any comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl Intention {
    /// The record as it is signed: every field except `signature`.
    pub fn signing_view(&self) -> SigningView<'_> {
        SigningView {
            intent: &self.intent,
            content_hash: &self.content_hash,
            client_id: &self.client_id,
            created_at: &self.created_at,
        }
    }

    /// Canonical bytes of the signing form — the exact input to HMAC
    /// computation and verification.
    pub fn canonical_signing_bytes(&self) -> Result<CanonicalBytes, CanonicalizationError> {
        CanonicalBytes::new(&self.signing_view())
    }
}

/// Borrowed view of an [`Intention`] with the `signature` field removed.
///
/// Serializes in declared wire field order; this is the only serialization
/// used for signature computation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningView<'a> {
    /// See [`Intention::intent`].
    pub intent: &'a str,
    /// See [`Intention::content_hash`].
    pub content_hash: &'a str,
    /// See [`Intention::client_id`].
    pub client_id: &'a str,
    /// See [`Intention::created_at`].
    pub created_at: &'a str,
}
