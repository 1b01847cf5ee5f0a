use axum::{extract::Extension, Json};

use crate::common::ApiError;
use crate::domains::summarization::{
    self, EvaluateRequest, EvaluateResponse, SummarizeRequest, SummarizeResponse,
};
use crate::server::app::AxumAppState;

/// Summarize the posted text
///
/// 400 for empty text or a zero budget, 413 when the optional input limit is
/// exceeded, 500/504 when the backend fails or times out.
pub async fn summarize_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let response =
        summarization::summarize_text(&request, &state.config, &state.server_deps).await?;
    Ok(Json(response))
}

/// ROUGE scores of a generated summary against a reference
pub async fn evaluate_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<EvaluateRequest>,
) -> Json<EvaluateResponse> {
    Json(summarization::evaluate_summary(&request, &state.server_deps))
}
