// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no request validation.
// Validation and dispatch live in domains/summarization/actions.rs.
//
// Naming convention: Base* for trait names (e.g., BaseSummarizer, BaseScorer)

use anyhow::Result;
use async_trait::async_trait;

use super::rouge::RougeScores;

// =============================================================================
// Summarizer Trait (Infrastructure - extractive or abstractive backend)
// =============================================================================

#[async_trait]
pub trait BaseSummarizer: Send + Sync {
    /// Summarize text, honoring an optional budget hint.
    ///
    /// The budget is a sentence count for extractive backends and a maximum
    /// generated length for abstractive ones. `None` uses the backend default.
    async fn summarize(&self, text: &str, budget: Option<usize>) -> Result<String>;

    /// Short backend name used in logs
    fn name(&self) -> &'static str;
}

// =============================================================================
// Scorer Trait (Infrastructure - summary evaluation)
// =============================================================================

pub trait BaseScorer: Send + Sync {
    /// Compare a generated summary against a reference summary
    fn score(&self, reference: &str, generated: &str) -> RougeScores;
}
