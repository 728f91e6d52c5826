//! # Quarantine Store
//!
//! Holding area for payloads the classifier flagged. An entry is owned
//! exclusively by this store from admission until a moderation decision
//! removes it — exactly once, via atomic find-and-remove.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use intentgate_core::{Intention, Payload};

use crate::store::Store;

/// A payload awaiting human moderation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarantineEntry {
    /// Opaque unique id, generated at admission and never reused.
    pub id: String,
    /// The verified intention that accompanied the payload.
    pub intention: Intention,
    /// The payload itself, held verbatim.
    pub payload: Payload,
    /// When the gateway accepted the submission into quarantine.
    pub received_at: DateTime<Utc>,
    /// The classifier score that triggered quarantine.
    pub score: f64,
}

/// Keyed collection of pending [`QuarantineEntry`] values.
///
/// Cloning shares the underlying map; all handlers operate on the same
/// store. A decided entry is gone from the map — nothing in the system
/// represents "rejected" after the fact.
#[derive(Debug, Clone, Default)]
pub struct QuarantineStore {
    entries: Store<QuarantineEntry>,
}

impl QuarantineStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit an entry under its id.
    pub fn admit(&self, entry: QuarantineEntry) {
        self.entries.insert(entry.id.clone(), entry);
    }

    /// Look up a pending entry without removing it.
    pub fn get(&self, id: &str) -> Option<QuarantineEntry> {
        self.entries.get(id)
    }

    /// Atomic find-and-remove for a moderation decision.
    ///
    /// Of any number of concurrent callers for the same id, exactly one
    /// receives the entry; the rest observe `None`.
    pub fn take(&self, id: &str) -> Option<QuarantineEntry> {
        self.entries.take(id)
    }

    /// Snapshot of all pending entries. No ordering guarantee.
    pub fn pending(&self) -> Vec<QuarantineEntry> {
        self.entries.list()
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
