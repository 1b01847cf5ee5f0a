// TestDependencies - mock implementations for testing
//
// Provides mock backends that can be injected into ServerDeps for tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::{BaseSummarizer, RougeScorer, ServerDeps};

// =============================================================================
// Mock Summarizer
// =============================================================================

/// Arguments captured from a summarize call
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizeCallArgs {
    pub text: String,
    pub budget: Option<usize>,
}

/// How the mock responds
#[derive(Debug, Clone)]
enum MockBehavior {
    Reply(String),
    Fail(String),
    Delay(Duration, String),
}

pub struct MockSummarizer {
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<SummarizeCallArgs>>>,
}

impl MockSummarizer {
    /// Always returns `summary`
    pub fn new(summary: &str) -> Self {
        Self {
            behavior: MockBehavior::Reply(summary.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            behavior: MockBehavior::Fail(message.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sleeps before replying (for timeout tests)
    pub fn slow(delay: Duration, summary: &str) -> Self {
        Self {
            behavior: MockBehavior::Delay(delay, summary.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get all calls made so far
    pub fn calls(&self) -> Vec<SummarizeCallArgs> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseSummarizer for MockSummarizer {
    async fn summarize(&self, text: &str, budget: Option<usize>) -> Result<String> {
        self.calls.lock().unwrap().push(SummarizeCallArgs {
            text: text.to_string(),
            budget,
        });

        match &self.behavior {
            MockBehavior::Reply(summary) => Ok(summary.clone()),
            MockBehavior::Fail(message) => Err(anyhow!("{}", message)),
            MockBehavior::Delay(delay, summary) => {
                tokio::time::sleep(*delay).await;
                Ok(summary.clone())
            }
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

// =============================================================================
// TestDependencies builder
// =============================================================================

/// Builds a ServerDeps with mock summarizers and the real ROUGE scorer
pub struct TestDependencies {
    pub extractive: Arc<MockSummarizer>,
    pub abstractive: Arc<MockSummarizer>,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            extractive: Arc::new(MockSummarizer::new("extractive summary")),
            abstractive: Arc::new(MockSummarizer::new("abstractive summary")),
        }
    }

    pub fn with_extractive(mut self, mock: MockSummarizer) -> Self {
        self.extractive = Arc::new(mock);
        self
    }

    pub fn with_abstractive(mut self, mock: MockSummarizer) -> Self {
        self.abstractive = Arc::new(mock);
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.extractive.clone(),
            self.abstractive.clone(),
            Arc::new(RougeScorer::new()),
        )
    }
}
