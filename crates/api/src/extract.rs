//! Request body extraction.
//!
//! Axum's built-in `Json` extractor insists on a `Content-Type` header and
//! answers failures with plain-text 4xx bodies. [`JsonBody`] reads the body
//! regardless of content type and turns every failure into
//! [`AppError::InvalidJson`].

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// JSON request body deserialized into `T`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::debug!(error = %err, "Failed to read request body");
            AppError::InvalidJson
        })?;
        parse_json(&bytes).map(JsonBody)
    }
}

/// Deserialize a JSON document, mapping any failure to [`AppError::InvalidJson`].
pub fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> AppResult<T> {
    serde_json::from_slice(bytes).map_err(|err| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::InvalidJson
    })
}

/// Returns `true` if the body is empty or only whitespace.
pub fn is_blank_body(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}
