//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor.
//!
//! AppState holds the gateway's collaborators behind `Arc`s:
//!
//! - the shared authentication secret,
//! - the risk classifier strategy and its quarantine threshold,
//! - the quarantine and publish stores,
//! - the audit sink.
//!
//! Everything is cheaply cloneable; clones share the underlying stores.

use std::path::PathBuf;
use std::sync::Arc;

use intentgate_classify::{KeywordClassifier, RiskClassifier};
use intentgate_crypto::SharedSecret;
use intentgate_state::{ArtifactWriter, AuditSink, FileAuditLog, PublishStore, QuarantineStore, StorageError};

/// Process configuration, assembled from the environment in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port to bind.
    pub port: u16,
    /// Shared HMAC authentication secret.
    pub shared_secret: SharedSecret,
    /// Classifier score at or above which submissions are quarantined.
    pub quarantine_threshold: f64,
    /// Path of the line-delimited audit log.
    pub audit_log: PathBuf,
    /// Directory receiving one JSON artifact per published record.
    pub publish_dir: PathBuf,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Shared HMAC authentication secret.
    pub secret: Arc<SharedSecret>,
    /// Quarantine routing threshold in `[0, 1]`.
    pub quarantine_threshold: f64,
    /// Risk scoring strategy.
    pub classifier: Arc<dyn RiskClassifier>,
    /// Pending entries awaiting moderation.
    pub quarantine: QuarantineStore,
    /// Append-only published records.
    pub published: PublishStore,
    /// Append-only decision trail.
    pub audit: Arc<dyn AuditSink>,
}

impl AppState {
    /// Build production state from configuration: file-backed audit log,
    /// filesystem artifact writer, default keyword classifier.
    pub fn new(config: &AppConfig) -> Result<Self, StorageError> {
        let audit = FileAuditLog::open(&config.audit_log)?;
        let artifacts = ArtifactWriter::new(&config.publish_dir)?;
        Ok(Self::with_components(
            config.shared_secret.clone(),
            config.quarantine_threshold,
            Arc::new(KeywordClassifier::default()),
            Arc::new(audit),
            artifacts,
        ))
    }

    /// Assemble state from explicit components. Used by tests and by
    /// embedders that swap the classifier or audit sink.
    pub fn with_components(
        secret: SharedSecret,
        quarantine_threshold: f64,
        classifier: Arc<dyn RiskClassifier>,
        audit: Arc<dyn AuditSink>,
        artifacts: ArtifactWriter,
    ) -> Self {
        Self {
            secret: Arc::new(secret),
            quarantine_threshold,
            classifier,
            quarantine: QuarantineStore::new(),
            published: PublishStore::new(artifacts),
            audit,
        }
    }
}
