//! Handler errors and their JSON rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pexels_core::ApiError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    /// The `{id}` path segment is not a non-negative integer.
    #[error("Invalid photo ID")]
    InvalidPhotoId,

    /// The upstream call failed; the message is passed through.
    #[error(transparent)]
    Upstream(#[from] ApiError),

    /// The blocking worker running the client call panicked or was cancelled.
    #[error("worker failed: {0}")]
    Worker(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPhotoId => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
