//! # intentgate-api — Axum HTTP Surface for the Intentgate Gateway
//!
//! Trust-gated content intake: a client attaches an integrity proof and an
//! authenticity signature to a payload; the gateway verifies both, scores
//! the payload for risk, and routes it to immediate publication or a
//! human-moderated quarantine queue. Every decision lands in an append-only
//! audit trail.
//!
//! ## API Surface
//!
//! | Route                     | Module                  | Purpose                         |
//! |---------------------------|-------------------------|---------------------------------|
//! | `POST /intention/submit`  | [`routes::submit`]      | Gated content intake            |
//! | `GET /moderation/pending` | [`routes::moderation`]  | Pending queue snapshot          |
//! | `GET /moderation/item/:qid` | [`routes::moderation`] | Single pending entry           |
//! | `POST /moderation/decide` | [`routes::moderation`]  | Resolve an entry exactly once   |
//! | `GET /published`          | [`routes::published`]   | Published records listing       |
//! | `GET /health`             | (here)                  | Liveness + pending count        |
//! | `GET /openapi.json`       | [`openapi`]             | Generated OpenAPI document      |

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod pipeline;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use utoipa::ToSchema;

use crate::state::AppState;

/// Assemble the full application router.
///
/// Request bodies are capped at 2 MiB; `TraceLayer` gives per-request
/// tracing spans. All routes share one [`AppState`].
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::submit::router())
        .merge(routes::moderation::router())
        .merge(routes::published::router())
        .merge(openapi::router())
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always true when the process can respond.
    pub ok: bool,
    /// Number of entries currently awaiting moderation.
    pub pending: usize,
}

/// GET /health — liveness plus the pending-queue depth.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        pending: state.quarantine.len(),
    })
}
