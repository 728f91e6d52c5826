//! # Submission Pipeline
//!
//! The verify → classify → route state machine:
//!
//! ```text
//! Received → IntegrityChecked → AuthenticityChecked → Classified
//!                                                       ├─ score ≥ threshold → Quarantined (202)
//!                                                       └─ otherwise         → Published   (200)
//! ```
//!
//! Terminal rejections: hash mismatch (400) and signature failure (401/400),
//! both permanent for the submission — there are no retries; a client
//! resubmits with corrected hash or signature.
//!
//! Every decision point emits exactly one audit event before the response
//! is produced. Audit or store failures abort the request with a storage
//! failure rather than succeeding silently.
//!
//! Moderation re-enters the publish-or-reject half of the machine through
//! [`resolve_quarantined`], which consumes a quarantine entry exactly once.

use chrono::Utc;

use intentgate_core::{Intention, Payload};
use intentgate_crypto::{
    verify_content_hash, verify_intention_signature, SubmissionToken, VerifyError,
};
use intentgate_state::{
    AuditEvent, AuditKind, Decision, PublishedRecord, QuarantineEntry,
};

use crate::error::GatewayError;
use crate::state::AppState;

/// Terminal accepting states of the submission pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Verified, low risk, persisted as a published record.
    Published {
        /// Id of the new published record.
        pub_id: String,
    },
    /// Verified, flagged by the classifier, held for moderation.
    Quarantined {
        /// Id of the new quarantine entry.
        qid: String,
    },
}

/// Run one submission through verify → classify → route.
///
/// Deterministic given its inputs (up to token generation). Emits exactly
/// one audit event per decision point; verification failures are audited
/// before the error is returned.
pub fn process_submission(
    state: &AppState,
    intention: Intention,
    payload: Payload,
) -> Result<SubmissionOutcome, GatewayError> {
    // Integrity: the claimed content hash must match the payload bytes.
    if let Err(err) = verify_content_hash(&intention.content_hash, &payload) {
        return Err(match err {
            VerifyError::HashMismatch => {
                tracing::warn!(client_id = %intention.client_id, "content hash mismatch");
                state
                    .audit
                    .append(&AuditEvent::now(AuditKind::HashMismatch { intention }))?;
                GatewayError::HashMismatch
            }
            other => other.into(),
        });
    }

    // Authenticity: HMAC over the canonical signing form, constant-time.
    if let Err(err) = verify_intention_signature(&intention, &state.secret) {
        return Err(match err {
            VerifyError::MissingSignature => {
                tracing::warn!(client_id = %intention.client_id, "unsigned intention");
                state
                    .audit
                    .append(&AuditEvent::now(AuditKind::SignatureMismatch { intention }))?;
                GatewayError::MissingSignature
            }
            VerifyError::SignatureMismatch { structural: false } => {
                tracing::warn!(client_id = %intention.client_id, "signature mismatch");
                state
                    .audit
                    .append(&AuditEvent::now(AuditKind::SignatureMismatch { intention }))?;
                GatewayError::SignatureInvalid
            }
            VerifyError::SignatureMismatch { structural: true } => {
                tracing::warn!(client_id = %intention.client_id, "uncomparable signature");
                state.audit.append(&AuditEvent::now(
                    AuditKind::SignatureMismatchException { intention },
                ))?;
                GatewayError::SignatureInvalid
            }
            other => other.into(),
        });
    }

    // Classification and routing.
    let score = state.classifier.score(&payload);

    if score.meets(state.quarantine_threshold) {
        let qid = SubmissionToken::generate().into_string();
        state.quarantine.admit(QuarantineEntry {
            id: qid.clone(),
            intention: intention.clone(),
            payload,
            received_at: Utc::now(),
            score: score.value(),
        });
        state.audit.append(&AuditEvent::now(AuditKind::Quarantined {
            intent_name: intention.intent,
            client_id: intention.client_id,
            content_hash: intention.content_hash,
            classifier_score: score.value(),
            qid: qid.clone(),
        }))?;
        tracing::info!(%qid, score = score.value(), "submission quarantined");
        Ok(SubmissionOutcome::Quarantined { qid })
    } else {
        let pub_id = SubmissionToken::generate().into_string();
        state.published.append(PublishedRecord {
            id: pub_id.clone(),
            intention: intention.clone(),
            payload,
            published_at: Utc::now(),
            moderator: None,
        })?;
        state.audit.append(&AuditEvent::now(AuditKind::Published {
            intent_name: intention.intent,
            client_id: intention.client_id,
            content_hash: intention.content_hash,
            classifier_score: score.value(),
            pub_id: pub_id.clone(),
        }))?;
        tracing::info!(%pub_id, score = score.value(), "submission published");
        Ok(SubmissionOutcome::Published { pub_id })
    }
}

/// Resolve a quarantined entry to its terminal state.
///
/// The entry is removed atomically: of concurrent calls for the same id,
/// exactly one proceeds; the rest see `NotFound`. On publish the entry
/// becomes a published record attributed to the moderator; on reject
/// nothing is retained. Returns the emitted `moderation_decision` audit
/// event, which the route hands back to the caller as the decision trace.
pub fn resolve_quarantined(
    state: &AppState,
    qid: &str,
    decision: Decision,
    moderator: String,
    note: Option<String>,
) -> Result<AuditEvent, GatewayError> {
    let entry = state
        .quarantine
        .take(qid)
        .ok_or_else(|| GatewayError::NotFound("qid not found".to_string()))?;

    let event = match decision {
        Decision::Publish => {
            let pub_id = SubmissionToken::generate().into_string();
            state.published.append(PublishedRecord {
                id: pub_id.clone(),
                intention: entry.intention,
                payload: entry.payload,
                published_at: Utc::now(),
                moderator: Some(moderator.clone()),
            })?;
            tracing::info!(%qid, %pub_id, %moderator, "quarantined entry published");
            AuditEvent::now(AuditKind::ModerationDecision {
                qid: qid.to_string(),
                decision,
                moderator,
                note,
                pub_id: Some(pub_id),
                rejected: false,
            })
        }
        Decision::Reject => {
            tracing::info!(%qid, %moderator, "quarantined entry rejected");
            AuditEvent::now(AuditKind::ModerationDecision {
                qid: qid.to_string(),
                decision,
                moderator,
                note,
                pub_id: None,
                rejected: true,
            })
        }
    };
    state.audit.append(&event)?;
    Ok(event)
}
