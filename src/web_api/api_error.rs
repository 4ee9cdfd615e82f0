use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store_error::StoreError;

/// Everything a handler can fail with. The body is always `{"message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input, detected before storage is touched.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// Anything else the store reported. Safe to retry.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Classify a store error, keeping `context` for genuine store faults.
    ///
    /// Use as `.map_err(ApiError::store("Error updating task"))`.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |source| match source {
            StoreError::NotFound { .. } => ApiError::NotFound(source.to_string()),
            StoreError::DanglingReference { .. } | StoreError::Duplicate { .. } => {
                ApiError::Validation(source.to_string())
            }
            source => ApiError::Store { context, source },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Store { .. } => tracing::error!(error = %self, "store failure"),
            _ => tracing::debug!(error = %self, %status, "request rejected"),
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
