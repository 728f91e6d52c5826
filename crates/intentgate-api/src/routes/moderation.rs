//! # Moderation Console
//!
//! Read access to the quarantine queue plus the decide endpoint that
//! resolves an entry to its terminal state. A decision consumes the entry
//! atomically — a second decision on the same id sees 404.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use intentgate_core::{Intention, Payload};
use intentgate_state::{AuditEvent, Decision};

use crate::error::GatewayError;
use crate::extractors::extract_json;
use crate::pipeline;
use crate::state::AppState;

/// Build the moderation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/moderation/pending", get(list_pending))
        .route("/moderation/item/:qid", get(get_pending))
        .route("/moderation/decide", post(decide))
}

/// Summary row in the pending listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendingItem {
    /// Quarantine entry id.
    pub qid: String,
    /// `intent` field of the held submission.
    pub intent: String,
    /// Submitting client.
    pub client_id: String,
    /// When the entry was quarantined.
    pub received_at: DateTime<Utc>,
    /// Classifier score that triggered quarantine.
    pub score: f64,
}

/// Pending listing response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PendingList {
    /// One row per pending entry; no ordering guarantee.
    pub pending: Vec<PendingItem>,
}

/// Full view of a single pending entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendingItemDetail {
    /// The held intention, verbatim.
    #[schema(value_type = Object)]
    pub intention: Intention,
    /// The held payload, verbatim.
    #[schema(value_type = Object)]
    pub payload: Payload,
    /// When the entry was quarantined.
    pub received_at: DateTime<Utc>,
    /// Classifier score that triggered quarantine.
    pub score: f64,
}

/// Decide request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DecideRequest {
    /// Id of the entry to resolve.
    pub qid: String,
    /// `publish` or `reject`.
    #[schema(value_type = String)]
    pub decision: Decision,
    /// Who is deciding.
    pub moderator: String,
    /// Free-form note recorded in the audit trail.
    #[serde(default)]
    pub note: Option<String>,
}

/// Decide response: the recorded audit event is returned as the trace.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DecideResponse {
    /// Always `"ok"` on success.
    pub status: String,
    /// The `moderation_decision` audit event that was appended.
    #[schema(value_type = Object)]
    pub trace: AuditEvent,
}

/// GET /moderation/pending — snapshot of entries awaiting moderation.
#[utoipa::path(
    get,
    path = "/moderation/pending",
    responses(
        (status = 200, description = "Pending entries", body = PendingList),
    ),
    tag = "moderation"
)]
pub(crate) async fn list_pending(State(state): State<AppState>) -> Json<PendingList> {
    let pending = state
        .quarantine
        .pending()
        .into_iter()
        .map(|entry| PendingItem {
            qid: entry.id,
            intent: entry.intention.intent,
            client_id: entry.intention.client_id,
            received_at: entry.received_at,
            score: entry.score,
        })
        .collect();
    Json(PendingList { pending })
}

/// GET /moderation/item/:qid — full view of one pending entry.
#[utoipa::path(
    get,
    path = "/moderation/item/{qid}",
    params(("qid" = String, Path, description = "Quarantine entry id")),
    responses(
        (status = 200, description = "The pending entry", body = PendingItemDetail),
        (status = 404, description = "No such pending entry", body = crate::error::ErrorBody),
    ),
    tag = "moderation"
)]
pub(crate) async fn get_pending(
    State(state): State<AppState>,
    Path(qid): Path<String>,
) -> Result<Json<PendingItemDetail>, GatewayError> {
    let entry = state
        .quarantine
        .get(&qid)
        .ok_or_else(|| GatewayError::NotFound("not found".to_string()))?;
    Ok(Json(PendingItemDetail {
        intention: entry.intention,
        payload: entry.payload,
        received_at: entry.received_at,
        score: entry.score,
    }))
}

/// POST /moderation/decide — resolve a pending entry exactly once.
#[utoipa::path(
    post,
    path = "/moderation/decide",
    request_body = DecideRequest,
    responses(
        (status = 200, description = "Decision recorded", body = DecideResponse),
        (status = 404, description = "Unknown or already-decided qid", body = crate::error::ErrorBody),
    ),
    tag = "moderation"
)]
pub(crate) async fn decide(
    State(state): State<AppState>,
    body: Result<Json<DecideRequest>, JsonRejection>,
) -> Result<Json<DecideResponse>, GatewayError> {
    let req = extract_json(body)?;
    let trace = pipeline::resolve_quarantined(&state, &req.qid, req.decision, req.moderator, req.note)?;
    Ok(Json(DecideResponse {
        status: "ok".to_string(),
        trace,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_json, signed_submission, test_context, TestContext};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::pipeline::{process_submission, SubmissionOutcome};
    use intentgate_state::AuditKind;

    fn test_app(ctx: &TestContext) -> Router {
        router().with_state(ctx.state.clone())
    }

    fn quarantine_one(ctx: &TestContext) -> String {
        let (intention, payload) = signed_submission("bomb plan and kill");
        match process_submission(&ctx.state, intention, payload).unwrap() {
            SubmissionOutcome::Quarantined { qid } => qid,
            other => panic!("expected quarantine, got {other:?}"),
        }
    }

    fn decide_request(qid: &str, decision: &str, moderator: &str) -> Request<Body> {
        let body = serde_json::json!({
            "qid": qid,
            "decision": decision,
            "moderator": moderator,
            "note": "checked",
        });
        Request::builder()
            .method("POST")
            .uri("/moderation/decide")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn pending_lists_each_quarantined_entry() {
        let ctx = test_context();
        let q1 = quarantine_one(&ctx);
        let q2 = quarantine_one(&ctx);

        let req = Request::builder()
            .uri("/moderation/pending")
            .body(Body::empty())
            .unwrap();
        let resp = test_app(&ctx).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: PendingList = body_json(resp).await;
        assert_eq!(body.pending.len(), 2);
        let qids: Vec<&str> = body.pending.iter().map(|p| p.qid.as_str()).collect();
        assert!(qids.contains(&q1.as_str()));
        assert!(qids.contains(&q2.as_str()));
        for item in &body.pending {
            assert_eq!(item.intent, "publish_post");
            assert_eq!(item.client_id, "client-1");
            assert!((item.score - 0.6).abs() < 1e-9);
        }
    }

    #[tokio::test]
    async fn pending_shrinks_after_decision() {
        let ctx = test_context();
        for _ in 0..3 {
            quarantine_one(&ctx);
        }
        let victim = ctx.state.quarantine.pending()[0].id.clone();
        pipeline::resolve_quarantined(&ctx.state, &victim, Decision::Reject, "m".into(), None)
            .unwrap();

        let req = Request::builder()
            .uri("/moderation/pending")
            .body(Body::empty())
            .unwrap();
        let resp = test_app(&ctx).oneshot(req).await.unwrap();
        let body: PendingList = body_json(resp).await;
        assert_eq!(body.pending.len(), 2);
    }

    #[tokio::test]
    async fn item_returns_full_entry() {
        let ctx = test_context();
        let qid = quarantine_one(&ctx);

        let req = Request::builder()
            .uri(format!("/moderation/item/{qid}"))
            .body(Body::empty())
            .unwrap();
        let resp = test_app(&ctx).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: PendingItemDetail = body_json(resp).await;
        assert_eq!(body.intention.client_id, "client-1");
        assert_eq!(body.payload, serde_json::json!({"text": "bomb plan and kill"}));
    }

    #[tokio::test]
    async fn unknown_item_is_404() {
        let ctx = test_context();
        let req = Request::builder()
            .uri("/moderation/item/does-not-exist")
            .body(Body::empty())
            .unwrap();
        let resp = test_app(&ctx).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = body_json(resp).await;
        assert_eq!(body["error"], "not found");
    }

    #[tokio::test]
    async fn decide_publish_returns_trace_with_pub_id() {
        let ctx = test_context();
        let qid = quarantine_one(&ctx);

        let resp = test_app(&ctx)
            .oneshot(decide_request(&qid, "publish", "mod-alice"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: DecideResponse = body_json(resp).await;
        assert_eq!(body.status, "ok");
        match body.trace.kind {
            AuditKind::ModerationDecision {
                qid: traced_qid,
                pub_id,
                rejected,
                moderator,
                ..
            } => {
                assert_eq!(traced_qid, qid);
                assert_eq!(moderator, "mod-alice");
                assert!(!rejected);
                let pub_id = pub_id.expect("publish decision carries pubId");
                assert!(ctx.state.published.list().iter().any(|r| r.id == pub_id));
            }
            other => panic!("expected moderation_decision trace, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn decide_reject_publishes_nothing() {
        let ctx = test_context();
        let qid = quarantine_one(&ctx);

        let resp = test_app(&ctx)
            .oneshot(decide_request(&qid, "reject", "mod-alice"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: DecideResponse = body_json(resp).await;
        match body.trace.kind {
            AuditKind::ModerationDecision { rejected, pub_id, .. } => {
                assert!(rejected);
                assert!(pub_id.is_none());
            }
            other => panic!("expected moderation_decision trace, got {other:?}"),
        }
        assert!(ctx.state.published.is_empty());
        assert!(ctx.state.quarantine.is_empty());
    }

    #[tokio::test]
    async fn second_decide_is_404() {
        let ctx = test_context();
        let qid = quarantine_one(&ctx);

        let app = test_app(&ctx);
        let first = app
            .clone()
            .oneshot(decide_request(&qid, "publish", "mod-a"))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .oneshot(decide_request(&qid, "reject", "mod-b"))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = body_json(second).await;
        assert_eq!(body["error"], "qid not found");
    }

    #[tokio::test]
    async fn unknown_decision_value_is_400() {
        let ctx = test_context();
        let qid = quarantine_one(&ctx);

        let resp = test_app(&ctx)
            .oneshot(decide_request(&qid, "escalate", "mod-a"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        // The entry is untouched by the rejected request.
        assert!(ctx.state.quarantine.get(&qid).is_some());
    }
}
