//! Request/response shapes for the summarization API.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::kernel::RougeScores;

/// Which backend produces the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizationMethod {
    /// Select sentences from the input, ranked by graph centrality
    Extractive,
    /// Generate new text with a pretrained sequence-to-sequence model
    Abstractive,
}

impl SummarizationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extractive => "extractive",
            Self::Abstractive => "abstractive",
        }
    }
}

impl fmt::Display for SummarizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummarizationMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extractive" => Ok(Self::Extractive),
            "abstractive" => Ok(Self::Abstractive),
            other => Err(anyhow!("unknown summarization method: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    /// Sentence count for extractive, max generated length for abstractive
    #[serde(default)]
    pub max_sentences: Option<u32>,
    #[serde(default)]
    pub method: Option<SummarizationMethod>,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_sentences: None,
            method: None,
        }
    }

    pub fn with_max_sentences(mut self, max_sentences: u32) -> Self {
        self.max_sentences = Some(max_sentences);
        self
    }

    pub fn with_method(mut self, method: SummarizationMethod) -> Self {
        self.method = Some(method);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub method: SummarizationMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Ok,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: HealthState,
    pub env: String,
}

impl HealthStatus {
    pub fn ok(env: impl Into<String>) -> Self {
        Self {
            status: HealthState::Ok,
            env: env.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub reference: String,
    pub generated: String,
}

pub type EvaluateResponse = RougeScores;
