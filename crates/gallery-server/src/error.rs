//! Server error types

use crate::evaluation::EvaluationError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use gallery_curl::ParseError;
use gallery_llm::LLMError;
use gallery_repository::RepositoryError;
use serde_json::json;
use std::fmt;

/// Server error type
#[derive(Debug)]
pub enum ServerError {
    /// Invalid request
    InvalidRequest(String),

    /// Missing or wrong credentials
    Unauthorized,

    /// Not found
    NotFound(String),

    /// Well-formed request with unusable content
    Unprocessable(String),

    /// A collaborator (LLM, evaluation service) failed
    Upstream(String),

    /// Internal server error
    InternalError(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ServerError::Unauthorized => write!(f, "Invalid username or password"),
            ServerError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ServerError::Unprocessable(msg) => write!(f, "Unprocessable: {}", msg),
            ServerError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            ServerError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ServerError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            ServerError::Unauthorized => "Invalid username or password".to_string(),
            ServerError::InvalidRequest(msg)
            | ServerError::NotFound(msg)
            | ServerError::Unprocessable(msg)
            | ServerError::Upstream(msg)
            | ServerError::InternalError(msg) => msg,
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", error_message);
        }

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        if status == StatusCode::UNAUTHORIZED {
            return (status, [(header::WWW_AUTHENTICATE, "Basic")], body).into_response();
        }

        (status, body).into_response()
    }
}

impl From<ParseError> for ServerError {
    fn from(err: ParseError) -> Self {
        ServerError::InvalidRequest(err.to_string())
    }
}

impl From<LLMError> for ServerError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::InvalidRequest(msg) => ServerError::InvalidRequest(msg),
            LLMError::ApiCallFailed(_) | LLMError::HttpError(_) | LLMError::InvalidResponse(_) => {
                ServerError::Upstream(err.to_string())
            }
            LLMError::InvalidConfiguration(_) | LLMError::SerializationError(_) => {
                ServerError::InternalError(err.to_string())
            }
        }
    }
}

impl From<RepositoryError> for ServerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidId { .. } => ServerError::Unprocessable(err.to_string()),
            RepositoryError::NotFound { .. } => ServerError::NotFound(err.to_string()),
            RepositoryError::InvalidQuery(msg) => ServerError::InvalidRequest(msg),
            _ => ServerError::InternalError(err.to_string()),
        }
    }
}

impl From<EvaluationError> for ServerError {
    fn from(err: EvaluationError) -> Self {
        match err {
            EvaluationError::NotConfigured => ServerError::InternalError(err.to_string()),
            _ => ServerError::Upstream(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
