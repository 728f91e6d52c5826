//! # API Route Modules
//!
//! - `submit` — `POST /intention/submit`, the gated intake endpoint.
//! - `moderation` — pending listing, single-item view, and the decide
//!   endpoint that resolves a quarantined entry exactly once.
//! - `published` — read-only listing of published records.

pub mod moderation;
pub mod published;
pub mod submit;
