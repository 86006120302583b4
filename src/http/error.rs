//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Collision descriptions for schedule conflicts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Request is malformed at the HTTP layer (before reaching the store)
    BadRequest(String),
    /// Store error, mapped per variant
    Store(StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Store(err) => match err {
                StoreError::Validation(_) => (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("VALIDATION_ERROR", err.to_string()),
                ),
                StoreError::NotFound(_) => (
                    StatusCode::NOT_FOUND,
                    ApiError::new("NOT_FOUND", err.to_string()),
                ),
                StoreError::DuplicateId(_) => (
                    StatusCode::CONFLICT,
                    ApiError::new("DUPLICATE_ID", err.to_string()),
                ),
                StoreError::Conflict(details) => (
                    StatusCode::CONFLICT,
                    ApiError::new(
                        "SCHEDULE_CONFLICT",
                        "exam collides with the existing schedule",
                    )
                    .with_details(details),
                ),
                StoreError::Persistence(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("PERSISTENCE_ERROR", err.to_string()),
                ),
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}
