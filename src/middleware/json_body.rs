//! Lenient JSON body extractor for Axum handlers.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;

/// JSON request body parsed regardless of the `Content-Type` header.
///
/// Unlike `axum::Json`, failures are reported through [`AppError`] so the
/// caller can tell a malformed document from an empty one:
/// ```ignore
/// async fn handler(JsonBody(body): JsonBody<CheckRequest>) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Buffering failures (e.g. body over the size limit) keep axum's own status.
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        tracing::debug!(body_bytes = bytes.len(), "Received JSON body");

        parse(&bytes).map(JsonBody).map_err(IntoResponse::into_response)
    }
}

/// Decode a request body that must be a non-empty JSON object.
pub fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::EmptyBody);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| AppError::MalformedJson(e.to_string()))?;

    match &value {
        Value::Null => return Err(AppError::EmptyBody),
        Value::Object(map) if map.is_empty() => return Err(AppError::EmptyBody),
        Value::Object(_) => {}
        _ => {
            return Err(AppError::MalformedJson(
                "expected a JSON object".to_string(),
            ))
        }
    }

    serde_json::from_value(value).map_err(|e| AppError::MalformedJson(e.to_string()))
}
