//! # Published Listing
//!
//! Read-only view over the append-only publish store. Payloads are not
//! inlined here — each published record has its own artifact on disk; the
//! listing carries identifying metadata only.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Build the published-listing router.
pub fn router() -> Router<AppState> {
    Router::new().route("/published", get(list_published))
}

/// Summary row for one published record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishedItem {
    /// Id of the published record.
    pub pub_id: String,
    /// `intent` field of the published submission.
    pub intent: String,
    /// When the record was published.
    pub published_at: DateTime<Utc>,
    /// Approving moderator, for records released from quarantine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderator: Option<String>,
}

/// Published listing response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublishedList {
    /// All published records, in publication order.
    pub published: Vec<PublishedItem>,
}

/// GET /published — all published records, in publication order.
#[utoipa::path(
    get,
    path = "/published",
    responses(
        (status = 200, description = "Published records", body = PublishedList),
    ),
    tag = "published"
)]
pub(crate) async fn list_published(State(state): State<AppState>) -> Json<PublishedList> {
    let published = state
        .published
        .list()
        .into_iter()
        .map(|record| PublishedItem {
            pub_id: record.id,
            intent: record.intention.intent,
            published_at: record.published_at,
            moderator: record.moderator,
        })
        .collect();
    Json(PublishedList { published })
}
