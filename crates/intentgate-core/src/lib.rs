#![deny(missing_docs)]

//! # intentgate-core — Foundational Types for the Intentgate Gateway
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `serde_json`,
//! `thiserror`, `sha2`, and `hex` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **[`CanonicalBytes`] is the sole path to digest and signature input.**
//!    Every content digest and every signing operation in the workspace flows
//!    through `CanonicalBytes::new()`, which produces an order-preserving
//!    compact JSON serialization. There is no second serialization path that
//!    could diverge from it.
//!
//! 2. **The signing form is explicit.** An [`Intention`]'s authenticated
//!    bytes are produced from its [`SigningView`] — the record with the
//!    `signature` field removed — never from ad-hoc field plucking at call
//!    sites.
//!
//! 3. **Structured errors with `thiserror`.** No `Box<dyn Error>`, no
//!    `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod intention;

pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest};
pub use error::CanonicalizationError;
pub use intention::{Intention, Payload, SigningView};
