//! Unified error handling for the API.
//!
//! Provides a unified `AppError` type mapping store failures onto HTTP
//! responses. All route handlers return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Self::Store(err) = self;

        let status = match &err {
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::DuplicateCode(_) => StatusCode::CONFLICT,
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose storage details to clients; the mutation they cover
        // has already happened in memory, so this is logged loudly instead.
        let message = match &err {
            StoreError::Storage(source) => {
                tracing::error!(error = %source, "persistence failure");
                "Internal server error".to_string()
            }
            _ => err.to_string(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
