//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//!
//! Error bodies on this surface are the flat `{"error": "<message>"}` shape
//! the wire contract fixes for clients. Internal storage failures are
//! logged with full detail but surface only as a generic message.
//!
//! The two signature failure modes (comparison failure, structurally
//! uncomparable input) map to the same variant here: response shape must
//! not reveal which one occurred.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use intentgate_crypto::VerifyError;
use intentgate_state::StorageError;

/// Flat JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Request body missing required parts or undeserializable (400).
    /// No audit event, no pipeline entry.
    #[error("{0}")]
    MalformedRequest(String),

    /// Payload digest does not match the claimed content hash (400).
    /// Audited as `hash_mismatch` before the response is produced.
    #[error("contentHash mismatch")]
    HashMismatch,

    /// Intention carries no signature (400). Audited as a signature-stage
    /// rejection before the response is produced.
    #[error("missing signature")]
    MissingSignature,

    /// Signature verification failed (401). Covers both clean comparison
    /// failure and structurally uncomparable input; the audit trail keeps
    /// the distinction, the response does not.
    #[error("signature verification failed")]
    SignatureInvalid,

    /// Unknown quarantine id (404). No audit event.
    #[error("{0}")]
    NotFound(String),

    /// Durable write or append failed (500). Propagated, never masked —
    /// a silent failure here would break the audit guarantee.
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl GatewayError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) | Self::HashMismatch | Self::MissingSignature => {
                StatusCode::BAD_REQUEST
            }
            Self::SignatureInvalid => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Storage details are logged for operators, not returned to clients.
        let message = match &self {
            Self::Storage(err) => {
                tracing::error!(error = %err, "durable write failed");
                "storage failure".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<VerifyError> for GatewayError {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::HashMismatch => Self::HashMismatch,
            VerifyError::MissingSignature => Self::MissingSignature,
            VerifyError::SignatureMismatch { .. } => Self::SignatureInvalid,
            VerifyError::Canonicalization(e) => Self::MalformedRequest(e.to_string()),
        }
    }
}
