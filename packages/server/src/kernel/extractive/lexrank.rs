//! LexRank sentence centrality.
//!
//! Sentences become nodes of a similarity graph (TF-IDF cosine, edges kept
//! above a threshold) ranked with damped PageRank power iteration.

use std::collections::{HashMap, HashSet};

use stop_words::{get, LANGUAGE};

use crate::kernel::text::{words, WordStemmer};

/// LexRank configuration
#[derive(Debug, Clone)]
pub struct LexRank {
    /// Minimum cosine similarity for an edge
    pub threshold: f64,
    /// Damping factor (typically 0.85)
    pub damping: f64,
    pub max_iterations: usize,
    /// Convergence threshold (L1 norm between iterations)
    pub tolerance: f64,
}

impl Default for LexRank {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Stemmed content terms of one sentence
pub(crate) struct SentenceTerms {
    counts: HashMap<String, f64>,
}

impl SentenceTerms {
    fn max_count(&self) -> f64 {
        self.counts.values().copied().fold(0.0, f64::max)
    }
}

/// Turns raw sentences into stemmed, stopword-free term counts
pub(crate) struct TermExtractor {
    stopwords: HashSet<String>,
    stemmer: WordStemmer,
}

impl TermExtractor {
    pub fn english() -> Self {
        Self {
            stopwords: get(LANGUAGE::English).iter().map(|s| s.to_string()).collect(),
            stemmer: WordStemmer::new(),
        }
    }

    pub fn terms(&self, sentence: &str) -> SentenceTerms {
        let mut counts = HashMap::new();
        for word in words(sentence) {
            if self.stopwords.contains(&word) {
                continue;
            }
            *counts.entry(self.stemmer.stem(&word)).or_insert(0.0) += 1.0;
        }
        SentenceTerms { counts }
    }
}

impl LexRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Score each sentence; scores sum to 1 (empty input gives no scores)
    pub(crate) fn rank(&self, sentences: &[SentenceTerms]) -> Vec<f64> {
        let n = sentences.len();
        if n == 0 {
            return Vec::new();
        }

        let idf = inverse_document_frequency(sentences);
        let vectors: Vec<HashMap<&str, f64>> = sentences
            .iter()
            .map(|s| tf_idf_vector(s, &idf))
            .collect();

        // Weighted adjacency lists, symmetric
        let mut edges: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                let similarity = cosine(&vectors[i], &vectors[j]);
                if similarity > self.threshold {
                    edges[i].push((j, similarity));
                    edges[j].push((i, similarity));
                }
            }
        }

        self.power_iteration(&edges)
    }

    fn power_iteration(&self, edges: &[Vec<(usize, f64)>]) -> Vec<f64> {
        let n = edges.len();
        let totals: Vec<f64> = edges
            .iter()
            .map(|e| e.iter().map(|(_, w)| w).sum())
            .collect();
        let dangling: Vec<usize> = (0..n).filter(|&i| totals[i] <= 0.0).collect();

        let teleport = (1.0 - self.damping) / n as f64;
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        for _ in 0..self.max_iterations {
            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d]).sum();
            next.fill(teleport + self.damping * dangling_mass / n as f64);

            for (node, neighbors) in edges.iter().enumerate() {
                if totals[node] <= 0.0 {
                    continue;
                }
                for &(neighbor, weight) in neighbors {
                    next[neighbor] += self.damping * scores[node] * weight / totals[node];
                }
            }

            let delta: f64 = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();
            std::mem::swap(&mut scores, &mut next);
            if delta <= self.tolerance {
                break;
            }
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }
        scores
    }
}

/// Smoothed IDF: ln(1 + N / df), always positive
fn inverse_document_frequency(sentences: &[SentenceTerms]) -> HashMap<String, f64> {
    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for sentence in sentences {
        for term in sentence.counts.keys() {
            *document_frequency.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let n = sentences.len() as f64;
    document_frequency
        .into_iter()
        .map(|(term, df)| (term.to_string(), (1.0 + n / df as f64).ln()))
        .collect()
}

fn tf_idf_vector<'a>(sentence: &'a SentenceTerms, idf: &HashMap<String, f64>) -> HashMap<&'a str, f64> {
    let max = sentence.max_count();
    sentence
        .counts
        .iter()
        .map(|(term, count)| {
            let tf = if max > 0.0 { count / max } else { 0.0 };
            (term.as_str(), tf * idf.get(term).copied().unwrap_or(0.0))
        })
        .collect()
}

fn cosine(a: &HashMap<&str, f64>, b: &HashMap<&str, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, x)| b.get(term).map(|y| x * y))
        .sum();
    let norm_a = a.values().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.values().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
