//! # Publish Store
//!
//! Append-only record of published items. Every published record is also
//! written as a standalone JSON artifact, `{dir}/{id}.json`, so published
//! content survives the process. The artifact write happens before the
//! in-memory append: a failed write leaves no phantom record, and the
//! failure propagates as [`StorageError`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use intentgate_core::{Intention, Payload};

use crate::error::StorageError;

/// A published item. Never mutated or removed once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedRecord {
    /// Opaque unique id, generated at publication.
    pub id: String,
    /// The verified intention that accompanied the payload.
    pub intention: Intention,
    /// The published payload, verbatim.
    pub payload: Payload,
    /// When the record was published.
    pub published_at: DateTime<Utc>,
    /// Moderator who approved publication, when the record came out of
    /// quarantine rather than straight through the pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderator: Option<String>,
}

/// Writes published records as JSON artifacts into a directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    /// Create a writer rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The artifact directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Durably write one record as `{dir}/{id}.json` (pretty-printed).
    pub fn write(&self, record: &PublishedRecord) -> Result<PathBuf, StorageError> {
        let path = self.dir.join(format!("{}.json", record.id));
        let bytes = serde_json::to_vec_pretty(record)?;
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// Append-only store of published records.
///
/// Cloning shares the underlying list. Appends are serialized by the write
/// lock; `list` snapshots under a read lock, so readers never observe a
/// half-appended record.
#[derive(Debug, Clone)]
pub struct PublishStore {
    records: Arc<RwLock<Vec<PublishedRecord>>>,
    artifacts: ArtifactWriter,
}

impl PublishStore {
    /// Create an empty store writing artifacts through `artifacts`.
    pub fn new(artifacts: ArtifactWriter) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            artifacts,
        }
    }

    /// Persist and record a published item.
    ///
    /// The artifact is written first; only a successful write appends to
    /// the in-memory list. A storage failure propagates — it is never
    /// swallowed into a fake success.
    pub fn append(&self, record: PublishedRecord) -> Result<(), StorageError> {
        self.artifacts.write(&record)?;
        self.records.write().push(record);
        Ok(())
    }

    /// Snapshot of all published records, in publication order.
    pub fn list(&self) -> Vec<PublishedRecord> {
        self.records.read().clone()
    }

    /// Number of published records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether nothing has been published.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
