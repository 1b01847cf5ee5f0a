use axum::{extract::Extension, Json};

use crate::domains::summarization::{self, HealthStatus};
use crate::server::app::AxumAppState;

/// Health check endpoint
///
/// Always 200 with the configured environment name.
pub async fn health_handler(Extension(state): Extension<AxumAppState>) -> Json<HealthStatus> {
    Json(summarization::health(&state.config))
}
