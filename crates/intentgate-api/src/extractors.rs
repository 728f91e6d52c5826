//! # Request Extraction
//!
//! Helper for extracting JSON bodies with wire-contract error mapping.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::GatewayError;

/// Extract a JSON body, mapping deserialization failures to
/// [`GatewayError::MalformedRequest`].
///
/// Handlers use:
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., GatewayError> {
///     let req = extract_json(body)?;
///     // use req...
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, GatewayError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| GatewayError::MalformedRequest(err.body_text()))
}
