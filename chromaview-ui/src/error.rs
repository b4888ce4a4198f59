//! HTTP-facing error type
//!
//! Every domain failure is converted here into a typed JSON error envelope
//! with the right status code; nothing propagates as an unhandled fault that
//! would abort the session.

use crate::services::{AuthError, IngestError, MetaboliteError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Not authenticated or wrong credentials (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Conflict (409) - e.g., username already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Valid upload with nothing to show (422)
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Upstream query service failure (502)
    #[error("Upstream error: {0}")]
    BadGateway(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// chromaview-common error
    #[error("Common error: {0}")]
    Common(#[from] chromaview_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            ApiError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE", msg)
            }
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
            ApiError::Io(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                err.to_string(),
            ),
            ApiError::Common(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::DuplicateUsername => ApiError::Conflict(err.to_string()),
            AuthError::PasswordMismatch | AuthError::MissingField => {
                ApiError::BadRequest(err.to_string())
            }
            AuthError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::ParseFailed(_) => ApiError::BadRequest(err.to_string()),
            IngestError::NoSeriesFound => ApiError::Unprocessable(err.to_string()),
            IngestError::Io(e) => ApiError::Io(e),
        }
    }
}

impl From<MetaboliteError> for ApiError {
    fn from(err: MetaboliteError) -> Self {
        ApiError::BadGateway(err.to_string())
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
