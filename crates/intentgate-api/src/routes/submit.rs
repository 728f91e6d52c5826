//! # Submission Endpoint
//!
//! `POST /intention/submit` — the single gated entry point for content.
//! A request carries an intention and a payload; the pipeline verifies the
//! content hash and signature, classifies, and routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use intentgate_core::{Intention, Payload};

use crate::error::GatewayError;
use crate::extractors::extract_json;
use crate::pipeline::{self, SubmissionOutcome};
use crate::state::AppState;

/// Build the submission router.
pub fn router() -> Router<AppState> {
    Router::new().route("/intention/submit", post(submit_intention))
}

/// Submission request body.
///
/// Both parts are modeled as optional so their absence maps to the wire
/// contract's `missing intention or payload` rejection rather than a
/// generic deserialization error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitRequest {
    /// The signed intention record.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub intention: Option<Intention>,
    /// The content payload, opaque to the gateway.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub payload: Option<Payload>,
}

/// Submission response: `published` with a `pubId`, or `quarantined` with
/// a `qid`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    /// `"published"` or `"quarantined"`.
    pub status: String,
    /// Id of the published record, on direct publication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_id: Option<String>,
    /// Id of the quarantine entry, when held for moderation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qid: Option<String>,
}

/// POST /intention/submit — verify, classify, and route one submission.
#[utoipa::path(
    post,
    path = "/intention/submit",
    request_body = SubmitRequest,
    responses(
        (status = 200, description = "Verified and published", body = SubmitResponse),
        (status = 202, description = "Verified and quarantined for moderation", body = SubmitResponse),
        (status = 400, description = "Missing parts, hash mismatch, or missing signature", body = crate::error::ErrorBody),
        (status = 401, description = "Signature verification failed", body = crate::error::ErrorBody),
    ),
    tag = "submission"
)]
pub(crate) async fn submit_intention(
    State(state): State<AppState>,
    body: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResponse>), GatewayError> {
    let req = extract_json(body)?;
    let (Some(intention), Some(payload)) = (req.intention, req.payload) else {
        return Err(GatewayError::MalformedRequest(
            "missing intention or payload".to_string(),
        ));
    };

    match pipeline::process_submission(&state, intention, payload)? {
        SubmissionOutcome::Published { pub_id } => Ok((
            StatusCode::OK,
            Json(SubmitResponse {
                status: "published".to_string(),
                pub_id: Some(pub_id),
                qid: None,
            }),
        )),
        SubmissionOutcome::Quarantined { qid } => Ok((
            StatusCode::ACCEPTED,
            Json(SubmitResponse {
                status: "quarantined".to_string(),
                pub_id: None,
                qid: Some(qid),
            }),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_json, signed_submission, test_context, TestContext};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use intentgate_state::AuditKind;

    fn test_app(ctx: &TestContext) -> Router {
        router().with_state(ctx.state.clone())
    }

    fn submit_request(intention: &Intention, payload: &Payload) -> Request<Body> {
        let body = serde_json::json!({ "intention": intention, "payload": payload });
        Request::builder()
            .method("POST")
            .uri("/intention/submit")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn benign_submission_returns_200_published() {
        let ctx = test_context();
        let (intention, payload) = signed_submission("hello");

        let resp = test_app(&ctx)
            .oneshot(submit_request(&intention, &payload))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: SubmitResponse = body_json(resp).await;
        assert_eq!(body.status, "published");
        let pub_id = body.pub_id.expect("pubId present");
        assert!(body.qid.is_none());
        assert_eq!(ctx.state.published.list()[0].id, pub_id);
    }

    #[tokio::test]
    async fn flagged_submission_returns_202_quarantined() {
        let ctx = test_context();
        let (intention, payload) = signed_submission("bomb plan and kill");

        let resp = test_app(&ctx)
            .oneshot(submit_request(&intention, &payload))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::ACCEPTED);

        let body: SubmitResponse = body_json(resp).await;
        assert_eq!(body.status, "quarantined");
        let qid = body.qid.expect("qid present");
        assert!(body.pub_id.is_none());
        assert!(ctx.state.quarantine.get(&qid).is_some());
    }

    #[tokio::test]
    async fn missing_parts_return_400_without_audit_event() {
        let ctx = test_context();
        let req = Request::builder()
            .method("POST")
            .uri("/intention/submit")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let resp = test_app(&ctx).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = body_json(resp).await;
        assert_eq!(body["error"], "missing intention or payload");
        assert!(ctx.audit.is_empty(), "malformed requests are not audited");
    }

    #[tokio::test]
    async fn null_payload_counts_as_missing() {
        let ctx = test_context();
        let (intention, _) = signed_submission("hello");
        let body = serde_json::json!({ "intention": intention, "payload": null });
        let req = Request::builder()
            .method("POST")
            .uri("/intention/submit")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let resp = test_app(&ctx).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn hash_mismatch_returns_400_and_audits() {
        let ctx = test_context();
        let (intention, _) = signed_submission("hello");
        let tampered = serde_json::json!({"text": "tampered"});

        let resp = test_app(&ctx)
            .oneshot(submit_request(&intention, &tampered))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = body_json(resp).await;
        assert_eq!(body["error"], "contentHash mismatch");
        let events = ctx.audit.snapshot();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0].kind, AuditKind::HashMismatch { .. }));
        assert!(ctx.state.published.is_empty());
        assert!(ctx.state.quarantine.is_empty());
    }

    #[tokio::test]
    async fn bad_signature_returns_401() {
        let ctx = test_context();
        let (mut intention, payload) = signed_submission("hello");
        intention.signature = Some("ab".repeat(32));

        let resp = test_app(&ctx)
            .oneshot(submit_request(&intention, &payload))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = body_json(resp).await;
        assert_eq!(body["error"], "signature verification failed");
    }

    #[tokio::test]
    async fn structurally_invalid_signature_same_response_as_wrong() {
        let ctx = test_context();
        let (mut intention, payload) = signed_submission("hello");
        intention.signature = Some("zz".to_string());

        let resp = test_app(&ctx)
            .oneshot(submit_request(&intention, &payload))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = body_json(resp).await;
        assert_eq!(body["error"], "signature verification failed");
        // The distinction is audit-only.
        let events = ctx.audit.snapshot();
        assert!(matches!(
            events[0].kind,
            AuditKind::SignatureMismatchException { .. }
        ));
    }

    #[tokio::test]
    async fn missing_signature_returns_400() {
        let ctx = test_context();
        let (mut intention, payload) = signed_submission("hello");
        intention.signature = None;

        let resp = test_app(&ctx)
            .oneshot(submit_request(&intention, &payload))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = body_json(resp).await;
        assert_eq!(body["error"], "missing signature");
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let ctx = test_context();
        let payload = serde_json::json!({"text": "hello"});
        let content_hash = intentgate_crypto::payload_content_hash(&payload).unwrap();
        let mut intention = Intention {
            intent: "publish_post".to_string(),
            content_hash,
            client_id: "client-1".to_string(),
            created_at: "2026-08-07T12:00:00.000Z".to_string(),
            signature: None,
        };
        let other = intentgate_crypto::SharedSecret::from("not_the_gateway_secret");
        intention.signature =
            Some(intentgate_crypto::sign_intention(&intention, &other).unwrap());

        let resp = test_app(&ctx)
            .oneshot(submit_request(&intention, &payload))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn payload_key_order_is_significant() {
        // The client hashed {"a":..,"b":..}; submitting the same object
        // with reordered keys is a different byte sequence.
        let ctx = test_context();
        let payload: Payload = serde_json::from_str(r#"{"a": "x", "b": "y"}"#).unwrap();
        let content_hash = intentgate_crypto::payload_content_hash(&payload).unwrap();
        let mut intention = Intention {
            intent: "publish_post".to_string(),
            content_hash,
            client_id: "client-1".to_string(),
            created_at: "2026-08-07T12:00:00.000Z".to_string(),
            signature: None,
        };
        intention.signature = Some(
            intentgate_crypto::sign_intention(&intention, &ctx.secret()).unwrap(),
        );
        let reordered: Payload = serde_json::from_str(r#"{"b": "y", "a": "x"}"#).unwrap();

        let resp = test_app(&ctx)
            .oneshot(submit_request(&intention, &reordered))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
