//! Request body extraction.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// JSON request body, parsed the way a lenient JSON body parser does.
///
/// Only `application/json` and `+json` content types are read. Any other
/// content type, a missing one, or an empty body yields `T::default()`. A JSON
/// array also yields `T::default()`, since it has no named fields. Objects are
/// deserialized into `T`. Invalid JSON and top-level scalars are rejected with
/// [`ApiError::InvalidBody`] before the handler runs.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(JsonBody(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::InvalidBody(format!("Invalid JSON body: {}", e)))?;

        match value {
            Value::Object(_) => serde_json::from_value(value)
                .map(JsonBody)
                .map_err(|e| ApiError::InvalidBody(format!("Invalid JSON body: {}", e))),
            Value::Array(_) => Ok(JsonBody(T::default())),
            _ => Err(ApiError::InvalidBody(
                "JSON body must be an object or array".to_string(),
            )),
        }
    }
}

/// Whether the request declares a JSON media type (`application/json` or `*/*+json`).
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.contains('/') && mime.ends_with("+json"))
}
