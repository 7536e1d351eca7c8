//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::client::ClientError;
use crate::session::SessionError;

/// Structured error response body for the browser.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Sign-in required")]
    Unauthorized,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Clinic API unavailable: {0}")]
    Upstream(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "AUTH_REQUIRED",
                "Sign-in required".to_string(),
            ),
            ApiError::Forbidden(detail) => (StatusCode::FORBIDDEN, "FORBIDDEN", detail),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail),
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail),
            ApiError::Upstream(detail) => {
                tracing::warn!(detail = %detail, "Clinic API request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_UNAVAILABLE",
                    "The clinic service is unavailable, try again later".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(detail) => ApiError::NotFound(detail),
            ClientError::Status { status: 401, detail } => {
                tracing::debug!(detail = %detail, "Clinic API refused credentials");
                ApiError::Unauthorized
            }
            ClientError::Status { status: 403, detail } => ApiError::Forbidden(detail),
            ClientError::Status { status, detail } if (400..500).contains(&status) => {
                ApiError::BadRequest(detail)
            }
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
