//! Server dependencies for request handlers (using traits for testability)
//!
//! This module provides the central dependency container used by the
//! summarization domain. Every backend sits behind a trait so tests can
//! swap in mocks from `test_dependencies`.

use std::sync::Arc;

use crate::config::Config;
use crate::domains::summarization::models::SummarizationMethod;
use crate::kernel::{AbstractiveSummarizer, BaseScorer, BaseSummarizer, ExtractiveSummarizer, RougeScorer};

/// Backends shared read-only by all requests
#[derive(Clone)]
pub struct ServerDeps {
    pub extractive: Arc<dyn BaseSummarizer>,
    pub abstractive: Arc<dyn BaseSummarizer>,
    pub scorer: Arc<dyn BaseScorer>,
}

impl ServerDeps {
    pub fn new(
        extractive: Arc<dyn BaseSummarizer>,
        abstractive: Arc<dyn BaseSummarizer>,
        scorer: Arc<dyn BaseScorer>,
    ) -> Self {
        Self {
            extractive,
            abstractive,
            scorer,
        }
    }

    /// Production backends built from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(ExtractiveSummarizer::new()),
            Arc::new(AbstractiveSummarizer::from_config(config)),
            Arc::new(RougeScorer::new()),
        )
    }

    pub fn summarizer(&self, method: SummarizationMethod) -> &Arc<dyn BaseSummarizer> {
        match method {
            SummarizationMethod::Extractive => &self.extractive,
            SummarizationMethod::Abstractive => &self.abstractive,
        }
    }
}
