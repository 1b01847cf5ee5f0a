//! Word-level text normalization shared by the extractive ranker and ROUGE.

use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"[\p{L}\p{N}]+").expect("word pattern is valid");
}

/// Lowercase words made of letters and digits; everything else separates.
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// English stemmer applied to already-lowercased words
pub struct WordStemmer {
    stemmer: Stemmer,
    /// Words at or below this many characters are left unstemmed
    min_len: usize,
}

impl Default for WordStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordStemmer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            min_len: 0,
        }
    }

    /// Leave short words (e.g. "was", "has") unchanged
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn stem(&self, word: &str) -> String {
        if word.chars().count() <= self.min_len {
            return word.to_string();
        }
        self.stemmer.stem(word).into_owned()
    }

    pub fn stem_all(&self, words: &[String]) -> Vec<String> {
        words.iter().map(|w| self.stem(w)).collect()
    }
}

/// Rough token count used for the optional input limit
pub fn estimate_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}
