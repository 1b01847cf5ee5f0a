//! Extractive summarization: pick the most central sentences of the input.

mod lexrank;
mod sentences;

pub use lexrank::LexRank;
pub use sentences::split_sentences;

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;

use lexrank::TermExtractor;

use super::BaseSummarizer;

/// Sentences returned when the caller gives no budget
pub const DEFAULT_NUM_SENTENCES: usize = 3;

pub struct ExtractiveSummarizer {
    ranker: LexRank,
    extractor: Arc<TermExtractor>,
    default_sentences: usize,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractiveSummarizer {
    pub fn new() -> Self {
        Self {
            ranker: LexRank::default(),
            extractor: Arc::new(TermExtractor::english()),
            default_sentences: DEFAULT_NUM_SENTENCES,
        }
    }

    pub fn with_ranker(mut self, ranker: LexRank) -> Self {
        self.ranker = ranker;
        self
    }

    /// Rank and select on the current thread. Empty text gives an empty summary.
    pub fn summarize_blocking(&self, text: &str, budget: Option<usize>) -> String {
        select_sentences(&self.ranker, &self.extractor, text, budget.unwrap_or(self.default_sentences))
    }
}

fn select_sentences(ranker: &LexRank, extractor: &TermExtractor, text: &str, budget: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= budget {
        return sentences.join(" ");
    }

    let terms: Vec<_> = sentences.iter().map(|s| extractor.terms(s)).collect();
    let scores = ranker.rank(&terms);

    // Highest score first, earlier sentence wins ties
    let mut order: Vec<usize> = (0..sentences.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    order.truncate(budget);
    order.sort_unstable();

    order
        .into_iter()
        .map(|i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl BaseSummarizer for ExtractiveSummarizer {
    async fn summarize(&self, text: &str, budget: Option<usize>) -> Result<String> {
        let ranker = self.ranker.clone();
        let extractor = self.extractor.clone();
        let text = text.to_string();
        let budget = budget.unwrap_or(self.default_sentences);

        tokio::task::spawn_blocking(move || select_sentences(&ranker, &extractor, &text, budget))
            .await
            .context("Extractive ranking task failed")
    }

    fn name(&self) -> &'static str {
        "extractive"
    }
}
