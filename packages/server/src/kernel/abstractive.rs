//! Abstractive summarization through a Hugging Face compatible inference endpoint.
//!
//! The model runs remotely; this client truncates the input, sends fixed
//! generation parameters with deterministic decoding, and returns the first
//! generated sequence. The HTTP client is built lazily on first use and
//! shared for the life of the process.

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::BaseSummarizer;
use crate::config::Config;

/// Inputs longer than this many characters are truncated before inference
pub const MAX_INPUT_CHARS: usize = 1000;
pub const DEFAULT_MIN_LENGTH: usize = 20;
pub const DEFAULT_MAX_LENGTH: usize = 100;
/// Added to the HTTP client timeout so the request-level timeout fires first
const CLIENT_TIMEOUT_MARGIN: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Serialize)]
pub struct GenerationParameters {
    pub min_length: usize,
    pub max_length: usize,
    pub do_sample: bool,
}

impl GenerationParameters {
    /// A budget replaces the max length; min length never exceeds it
    pub fn for_budget(budget: Option<usize>) -> Self {
        let max_length = budget.unwrap_or(DEFAULT_MAX_LENGTH).max(1);
        Self {
            min_length: DEFAULT_MIN_LENGTH.min(max_length),
            max_length,
            do_sample: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
    options: InferenceOptions,
}

#[derive(Debug, Deserialize)]
struct GeneratedSequence {
    #[serde(default)]
    summary_text: Option<String>,
    #[serde(default)]
    generated_text: Option<String>,
}

/// Loaded model handle: HTTP client bound to one model endpoint
struct ModelHandle {
    http: Client,
    endpoint: String,
}

pub struct AbstractiveSummarizer {
    base_url: String,
    model_name: String,
    api_token: Option<String>,
    timeout: Duration,
    handle: OnceCell<ModelHandle>,
}

impl AbstractiveSummarizer {
    pub fn new(base_url: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model_name: model_name.into(),
            api_token: None,
            timeout: Duration::from_secs(crate::config::DEFAULT_INFERENCE_TIMEOUT_SECS),
            handle: OnceCell::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut summarizer = Self::new(&config.inference_url, &config.model_name)
            .with_timeout(config.inference_timeout);
        summarizer.api_token = config.inference_api_token.clone();
        summarizer
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.model_name)
    }

    fn client_timeout(&self) -> Duration {
        self.timeout + CLIENT_TIMEOUT_MARGIN
    }

    async fn handle(&self) -> Result<&ModelHandle> {
        self.handle
            .get_or_try_init(|| async {
                let http = Client::builder()
                    .timeout(self.client_timeout())
                    .build()
                    .context("Failed to build inference HTTP client")?;
                info!(model = %self.model_name, endpoint = %self.endpoint(), "Model handle initialized");
                Ok::<_, anyhow::Error>(ModelHandle {
                    http,
                    endpoint: self.endpoint(),
                })
            })
            .await
    }

    /// Check that the inference endpoint answers at all (any HTTP status)
    pub async fn probe(&self) -> Result<u16> {
        let handle = self.handle().await?;
        let response = handle
            .http
            .get(&handle.endpoint)
            .send()
            .await
            .with_context(|| format!("Inference endpoint unreachable: {}", handle.endpoint))?;
        Ok(response.status().as_u16())
    }
}

/// Cut text to at most `max_chars` characters without splitting a code point
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// First non-blank text of the first sequence, `summary_text` preferred
fn first_sequence(sequences: Vec<GeneratedSequence>) -> Result<String> {
    let non_blank =
        |text: Option<String>| text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
    sequences
        .into_iter()
        .next()
        .and_then(|s| non_blank(s.summary_text).or_else(|| non_blank(s.generated_text)))
        .ok_or_else(|| anyhow!("Inference response contained no generated text"))
}

#[async_trait]
impl BaseSummarizer for AbstractiveSummarizer {
    async fn summarize(&self, text: &str, budget: Option<usize>) -> Result<String> {
        let handle = self.handle().await?;
        let inputs = truncate_chars(text, MAX_INPUT_CHARS);
        let request = InferenceRequest {
            inputs,
            parameters: GenerationParameters::for_budget(budget),
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        debug!(
            model = %self.model_name,
            input_chars = inputs.chars().count(),
            max_length = request.parameters.max_length,
            "Calling inference endpoint"
        );

        let mut builder = handle.http.post(&handle.endpoint).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.context("Inference request failed")?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            bail!("Inference endpoint returned {}: {}", status.as_u16(), body);
        }

        let sequences: Vec<GeneratedSequence> = response
            .json()
            .await
            .context("Failed to parse inference response")?;
        first_sequence(sequences)
    }

    fn name(&self) -> &'static str {
        "abstractive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Json, Router};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "é".repeat(1500);
        let truncated = truncate_chars(&text, MAX_INPUT_CHARS);
        assert_eq!(truncated.chars().count(), 1000);
        assert_eq!(truncate_chars("short", 1000), "short");
    }

    #[test]
    fn test_generation_parameters() {
        let defaults = GenerationParameters::for_budget(None);
        assert_eq!((defaults.min_length, defaults.max_length), (20, 100));
        assert!(!defaults.do_sample);

        let small = GenerationParameters::for_budget(Some(5));
        assert_eq!((small.min_length, small.max_length), (5, 5));
    }

    #[test]
    fn test_first_sequence_prefers_summary_text() {
        let parsed: Vec<GeneratedSequence> =
            serde_json::from_str(r#"[{"summary_text": " A summary. "}]"#).unwrap();
        assert_eq!(first_sequence(parsed).unwrap(), "A summary.");

        let parsed: Vec<GeneratedSequence> =
            serde_json::from_str(r#"[{"generated_text": "Generated."}]"#).unwrap();
        assert_eq!(first_sequence(parsed).unwrap(), "Generated.");

        assert!(first_sequence(Vec::new()).is_err());
    }

    #[test]
    fn test_first_sequence_skips_blank_text() {
        let parsed: Vec<GeneratedSequence> =
            serde_json::from_str(r#"[{"summary_text": "   ", "generated_text": "Real."}]"#)
                .unwrap();
        assert_eq!(first_sequence(parsed).unwrap(), "Real.");

        let parsed: Vec<GeneratedSequence> =
            serde_json::from_str(r#"[{"summary_text": " ", "generated_text": "\n"}]"#).unwrap();
        assert!(first_sequence(parsed).is_err());

        let parsed: Vec<GeneratedSequence> =
            serde_json::from_str(r#"[{"summary_text": ""}]"#).unwrap();
        assert!(first_sequence(parsed).is_err());
    }

    #[test]
    fn test_client_timeout_outlasts_request_timeout() {
        let summarizer = AbstractiveSummarizer::new("http://127.0.0.1:9/models", "m")
            .with_timeout(Duration::from_secs(30));
        assert!(summarizer.client_timeout() > Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_blank_model_output_is_an_error() {
        let (url, _) = spawn_fake_inference(
            serde_json::json!([{"summary_text": "  "}]),
            axum::http::StatusCode::OK,
        )
        .await;
        let summarizer = AbstractiveSummarizer::new(url, "test-model");

        assert!(summarizer.summarize("Some text.", None).await.is_err());
    }

    async fn spawn_fake_inference(
        reply: serde_json::Value,
        status: axum::http::StatusCode,
    ) -> (String, Arc<Mutex<Vec<serde_json::Value>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorded = seen.clone();
        let app = Router::new().route(
            "/models/test-model",
            post(move |Json(body): Json<serde_json::Value>| {
                let recorded = recorded.clone();
                let reply = reply.clone();
                async move {
                    recorded.lock().unwrap().push(body);
                    (status, Json(reply))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/models", addr), seen)
    }

    #[tokio::test]
    async fn test_summarize_against_fake_endpoint() {
        let (url, seen) = spawn_fake_inference(
            serde_json::json!([{"summary_text": "Short summary."}]),
            axum::http::StatusCode::OK,
        )
        .await;
        let summarizer = AbstractiveSummarizer::new(url, "test-model");

        let long_text = "word ".repeat(400);
        let summary = summarizer.summarize(&long_text, Some(60)).await.unwrap();
        assert_eq!(summary, "Short summary.");

        let requests = seen.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let body = &requests[0];
        assert_eq!(body["inputs"].as_str().unwrap().chars().count(), MAX_INPUT_CHARS);
        assert_eq!(body["parameters"]["max_length"], 60);
        assert_eq!(body["parameters"]["do_sample"], false);
        assert_eq!(body["options"]["wait_for_model"], true);
    }

    #[tokio::test]
    async fn test_error_status_is_an_error() {
        let (url, _) = spawn_fake_inference(
            serde_json::json!({"error": "model is loading"}),
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
        )
        .await;
        let summarizer = AbstractiveSummarizer::new(url, "test-model");

        let err = summarizer.summarize("Some text.", None).await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_handle_is_initialized_once() {
        let summarizer = AbstractiveSummarizer::new("http://127.0.0.1:9/models", "m");
        let first = summarizer.handle().await.unwrap() as *const ModelHandle;
        let second = summarizer.handle().await.unwrap() as *const ModelHandle;
        assert_eq!(first, second);
    }
}
