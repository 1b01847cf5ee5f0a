pub mod actions;
pub mod models;

// Re-export commonly used types
pub use actions::{evaluate_summary, health, summarize_text, validate_request};
pub use models::{
    EvaluateRequest, EvaluateResponse, HealthState, HealthStatus, SummarizationMethod,
    SummarizeRequest, SummarizeResponse,
};
