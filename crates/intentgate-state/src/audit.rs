//! # Audit Log
//!
//! Append-only decision trail: one event per pipeline decision point, one
//! complete JSON line per event, never retroactively edited.
//!
//! The file-backed sink serializes and flushes each line while holding a
//! mutex, so concurrent emitters cannot interleave partial writes. Events
//! may land slightly out of chronological order under concurrency; no
//! event is ever lost, duplicated, or truncated. Append failures propagate
//! as [`StorageError`] — silently dropping an audit record would break the
//! trail's guarantee.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use intentgate_core::Intention;

use crate::error::StorageError;

/// Moderation decision for a quarantined entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Release the entry as a published record.
    Publish,
    /// Discard the entry. Nothing is retained afterward.
    Reject,
}

impl Decision {
    /// String form, as it appears on the wire and in the log.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Reject => "reject",
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// One audit record: a timestamp plus the decision-specific body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// When the event was recorded.
    pub time: DateTime<Utc>,
    /// Decision-specific body, tagged on the wire by the `event` field.
    #[serde(flatten)]
    pub kind: AuditKind,
}

impl AuditEvent {
    /// Stamp an event with the current time.
    pub fn now(kind: AuditKind) -> Self {
        Self {
            time: Utc::now(),
            kind,
        }
    }
}

/// Decision-specific audit bodies.
///
/// Serialized with an `event` tag in snake_case (`hash_mismatch`,
/// `signature_mismatch`, ...) and camelCase field names, the shape the
/// trail has always carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditKind {
    /// A submission's payload digest did not match its claimed hash.
    #[serde(rename_all = "camelCase")]
    HashMismatch {
        /// The offending intention, verbatim.
        intention: Intention,
    },
    /// A supplied signature failed the constant-time comparison, or the
    /// signature field was absent.
    #[serde(rename_all = "camelCase")]
    SignatureMismatch {
        /// The offending intention, verbatim.
        intention: Intention,
    },
    /// A supplied signature was structurally uncomparable (non-hex, wrong
    /// length). Externally indistinguishable from `SignatureMismatch`;
    /// the trail keeps the distinction for operators.
    #[serde(rename_all = "camelCase")]
    SignatureMismatchException {
        /// The offending intention, verbatim.
        intention: Intention,
    },
    /// A verified submission was routed to quarantine.
    #[serde(rename_all = "camelCase")]
    Quarantined {
        /// `intent` field of the submission.
        intent_name: String,
        /// Submitting client.
        client_id: String,
        /// Claimed (and verified) content hash.
        content_hash: String,
        /// Score that crossed the quarantine threshold.
        classifier_score: f64,
        /// Id of the quarantine entry.
        qid: String,
    },
    /// A verified submission was published directly.
    #[serde(rename_all = "camelCase")]
    Published {
        /// `intent` field of the submission.
        intent_name: String,
        /// Submitting client.
        client_id: String,
        /// Claimed (and verified) content hash.
        content_hash: String,
        /// Score below the quarantine threshold.
        classifier_score: f64,
        /// Id of the published record.
        pub_id: String,
    },
    /// A moderator resolved a quarantined entry.
    #[serde(rename_all = "camelCase")]
    ModerationDecision {
        /// Id of the decided quarantine entry.
        qid: String,
        /// The decision taken.
        decision: Decision,
        /// Who decided.
        moderator: String,
        /// Free-form moderator note.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
        /// Id of the resulting published record, on publish.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub_id: Option<String>,
        /// Set on reject; omitted otherwise.
        #[serde(default, skip_serializing_if = "is_false")]
        rejected: bool,
    },
}

/// Durable append capability for audit events.
///
/// `append` must write the event as one complete, atomic unit: concurrent
/// callers may interleave whole events but never fragments of them.
pub trait AuditSink: Send + Sync {
    /// Append one event to the trail.
    fn append(&self, event: &AuditEvent) -> Result<(), StorageError>;
}

/// Line-delimited JSON audit log backed by a file.
///
/// Each event becomes one line (`serde_json` escapes embedded newlines,
/// so a serialized event is always newline-free). The write and flush run
/// under a mutex, making the whole line the unit of interleaving.
#[derive(Debug)]
pub struct FileAuditLog {
    writer: Mutex<BufWriter<File>>,
}

impl FileAuditLog {
    /// Open (or create) the log file in append mode.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl AuditSink for FileAuditLog {
    fn append(&self, event: &AuditEvent) -> Result<(), StorageError> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');
        let mut writer = self.writer.lock();
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }
}

/// In-memory audit sink for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditLog {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, in append order.
    pub fn snapshot(&self) -> Vec<AuditEvent> {
        self.events.lock().clone()
    }

    /// Number of appended events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditLog {
    fn append(&self, event: &AuditEvent) -> Result<(), StorageError> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}
