//! Custom extractors
//!
//! Provides custom request extractors with better error handling.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::json;

/// Custom JSON extractor with better error messages
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => {
                let (status, error_message) = match rejection {
                    JsonRejection::JsonDataError(err) => (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        format!("Invalid JSON data: {}", err.body_text()),
                    ),
                    JsonRejection::JsonSyntaxError(err) => (
                        StatusCode::BAD_REQUEST,
                        format!("JSON syntax error: {}", err.body_text()),
                    ),
                    JsonRejection::MissingJsonContentType(_) => (
                        StatusCode::UNSUPPORTED_MEDIA_TYPE,
                        "Missing 'Content-Type: application/json' header".to_string(),
                    ),
                    _ => (
                        StatusCode::BAD_REQUEST,
                        format!("Failed to parse JSON: {}", rejection),
                    ),
                };

                Err((
                    status,
                    Json(json!({
                        "error": error_message,
                        "status": status.as_u16(),
                    })),
                ))
            }
        }
    }
}
