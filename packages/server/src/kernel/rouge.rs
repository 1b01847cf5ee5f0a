//! ROUGE-1, ROUGE-2 and ROUGE-L scoring.
//!
//! Tokens are lowercased alphanumeric runs; tokens longer than three
//! characters are stemmed. N-gram overlap uses clipped counts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::text::{words, WordStemmer};
use super::BaseScorer;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Score {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl Score {
    fn from_overlap(overlap: usize, generated: usize, reference: usize) -> Self {
        let precision = if generated > 0 {
            overlap as f64 / generated as f64
        } else {
            0.0
        };
        let recall = if reference > 0 {
            overlap as f64 / reference as f64
        } else {
            0.0
        };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            precision,
            recall,
            f1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RougeScores {
    pub rouge1: Score,
    pub rouge2: Score,
    #[serde(rename = "rougeL")]
    pub rouge_l: Score,
}

impl RougeScores {
    /// (metric name, score) pairs in display order
    pub fn entries(&self) -> [(&'static str, Score); 3] {
        [
            ("rouge1", self.rouge1),
            ("rouge2", self.rouge2),
            ("rougeL", self.rouge_l),
        ]
    }
}

pub struct RougeScorer {
    stemmer: WordStemmer,
}

impl Default for RougeScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RougeScorer {
    pub fn new() -> Self {
        Self {
            stemmer: WordStemmer::new().with_min_len(3),
        }
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        self.stemmer.stem_all(&words(text))
    }
}

impl BaseScorer for RougeScorer {
    fn score(&self, reference: &str, generated: &str) -> RougeScores {
        let reference = self.tokenize(reference);
        let generated = self.tokenize(generated);

        RougeScores {
            rouge1: ngram_score(&reference, &generated, 1),
            rouge2: ngram_score(&reference, &generated, 2),
            rouge_l: Score::from_overlap(
                lcs_length(&reference, &generated),
                generated.len(),
                reference.len(),
            ),
        }
    }
}

fn ngram_counts(tokens: &[String], n: usize) -> HashMap<&[String], usize> {
    let mut counts = HashMap::new();
    if tokens.len() >= n {
        for gram in tokens.windows(n) {
            *counts.entry(gram).or_insert(0) += 1;
        }
    }
    counts
}

fn ngram_score(reference: &[String], generated: &[String], n: usize) -> Score {
    let reference_counts = ngram_counts(reference, n);
    let generated_counts = ngram_counts(generated, n);

    let overlap: usize = reference_counts
        .iter()
        .map(|(gram, &count)| count.min(generated_counts.get(gram).copied().unwrap_or(0)))
        .sum();

    Score::from_overlap(
        overlap,
        generated_counts.values().sum(),
        reference_counts.values().sum(),
    )
}

/// Longest common subsequence length, two-row dynamic programming
fn lcs_length(a: &[String], b: &[String]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];
    for x in a {
        for (j, y) in b.iter().enumerate() {
            current[j + 1] = if x == y {
                previous[j] + 1
            } else {
                current[j].max(previous[j + 1])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}
