//! Summarization domain actions - entry-point business logic
//!
//! Called directly from HTTP handlers and the CLI. Actions take the raw
//! request, validate it, dispatch to a backend from ServerDeps, and return
//! the response model or an ApiError.

use tracing::{debug, info};

use crate::common::ApiError;
use crate::config::Config;
use crate::kernel::text::estimate_tokens;
use crate::kernel::ServerDeps;

use super::models::{EvaluateRequest, EvaluateResponse, HealthStatus, SummarizeRequest, SummarizeResponse};

/// Liveness report; never fails
pub fn health(config: &Config) -> HealthStatus {
    HealthStatus::ok(&config.env)
}

/// Validate a request without calling any backend
pub fn validate_request(request: &SummarizeRequest, config: &Config) -> Result<(), ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::invalid_input("Input text is empty"));
    }

    if request.max_sentences == Some(0) {
        return Err(ApiError::invalid_input("max_sentences must be a positive integer"));
    }

    if config.enforce_input_limit {
        let tokens = estimate_tokens(&request.text);
        if tokens > config.max_input_tokens {
            return Err(ApiError::InputTooLong {
                tokens,
                limit: config.max_input_tokens,
            });
        }
    }

    Ok(())
}

/// Summarize text with the requested (or configured default) backend.
///
/// The backend call is bounded by `config.inference_timeout`.
pub async fn summarize_text(
    request: &SummarizeRequest,
    config: &Config,
    deps: &ServerDeps,
) -> Result<SummarizeResponse, ApiError> {
    validate_request(request, config)?;

    let method = request.method.unwrap_or(config.default_method);
    let budget = request.max_sentences.map(|n| n as usize);
    let summarizer = deps.summarizer(method);

    debug!(
        %method,
        backend = summarizer.name(),
        input_chars = request.text.len(),
        ?budget,
        "Dispatching summarization"
    );

    let summary = tokio::time::timeout(
        config.inference_timeout,
        summarizer.summarize(&request.text, budget),
    )
    .await
    .map_err(|_| ApiError::Timeout(config.inference_timeout))??;

    info!(%method, summary_chars = summary.len(), "Summary generated");

    Ok(SummarizeResponse { summary, method })
}

/// Score a generated summary against a reference
pub fn evaluate_summary(request: &EvaluateRequest, deps: &ServerDeps) -> EvaluateResponse {
    deps.scorer.score(&request.reference, &request.generated)
}
