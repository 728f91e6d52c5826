//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the gateway surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Intentgate — Trust-Gated Content Submission Gateway",
        version = "0.1.0",
        description = "Verify-then-route content intake: integrity-proofed, signature-authenticated submissions are classified for risk and routed to publication or a human-moderated quarantine queue, with an append-only audit trail.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::submit::submit_intention,
        crate::routes::moderation::list_pending,
        crate::routes::moderation::get_pending,
        crate::routes::moderation::decide,
        crate::routes::published::list_published,
    ),
    components(schemas(
        crate::routes::submit::SubmitRequest,
        crate::routes::submit::SubmitResponse,
        crate::routes::moderation::PendingItem,
        crate::routes::moderation::PendingList,
        crate::routes::moderation::PendingItemDetail,
        crate::routes::moderation::DecideRequest,
        crate::routes::moderation::DecideResponse,
        crate::routes::published::PublishedItem,
        crate::routes::published::PublishedList,
        crate::error::ErrorBody,
        crate::HealthResponse,
    )),
    tags(
        (name = "submission", description = "Gated content intake"),
        (name = "moderation", description = "Quarantine queue and decisions"),
        (name = "published", description = "Published records"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
