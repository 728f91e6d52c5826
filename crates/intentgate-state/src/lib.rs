//! # intentgate-state — Gateway State
//!
//! The three durable outcomes of the pipeline live here:
//!
//! - [`QuarantineStore`] — keyed collection of entries awaiting moderation,
//!   with atomic find-and-remove so each entry is decided exactly once.
//! - [`PublishStore`] — append-only record of published items, each backed
//!   by a JSON artifact on disk.
//! - [`AuditSink`] implementations — the append-only decision trail, one
//!   complete JSONL line per event.
//!
//! All shared state is guarded with `parking_lot` locks (non-poisoning)
//! and never held across `.await` points — every operation here is
//! synchronous and short.

pub mod audit;
pub mod error;
pub mod publish;
pub mod quarantine;
pub mod store;

pub use audit::{AuditEvent, AuditKind, AuditSink, Decision, FileAuditLog, MemoryAuditLog};
pub use error::StorageError;
pub use publish::{ArtifactWriter, PublishStore, PublishedRecord};
pub use quarantine::{QuarantineEntry, QuarantineStore};
pub use store::Store;
