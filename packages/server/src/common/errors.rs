use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the summarization API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Input has ~{tokens} tokens, limit is {limit}")]
    InputTooLong { tokens: usize, limit: usize },

    #[error("Summarization timed out after {0:?}")]
    Timeout(Duration),

    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

/// JSON error body returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::InputTooLong { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show the caller. Backend causes stay in the logs.
    pub fn detail(&self) -> String {
        match self {
            Self::Backend(_) => "Internal server error".to_string(),
            Self::Timeout(_) => "Summarization timed out".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Backend(e) => tracing::error!(error = ?e, "Summarization backend failed"),
            Self::Timeout(after) => tracing::warn!(?after, "Summarization timed out"),
            other => tracing::debug!(error = %other, "Rejected request"),
        }

        (status, Json(ErrorBody { detail: self.detail() })).into_response()
    }
}
