//! # intentgate-crypto — Verification Primitives for the Intentgate Gateway
//!
//! Two verifiers and their supporting material:
//!
//! - **Integrity**: recompute `sha256(canonical(payload))` and compare it to
//!   the intention's claimed content hash ([`integrity`]).
//! - **Authenticity**: recompute HMAC-SHA256 over the intention's canonical
//!   signing form and compare it to the supplied signature in constant time
//!   ([`signature`]).
//!
//! Plus [`SharedSecret`] (zeroizing key material wrapper) and
//! [`SubmissionToken`] (random ids for quarantine entries and published
//! records).
//!
//! ## Anti-oracle design
//!
//! A structurally invalid signature (non-hex, wrong length) and a
//! cryptographically wrong signature produce the same externally visible
//! outcome. The distinction exists only as a flag consumed by the audit
//! log. Callers must not branch on it when shaping responses.

pub mod error;
pub mod integrity;
pub mod secret;
pub mod signature;
pub mod token;

pub use error::VerifyError;
pub use integrity::{payload_content_hash, verify_content_hash};
pub use secret::SharedSecret;
pub use signature::{sign_intention, verify_intention_signature};
pub use token::SubmissionToken;
