// Text Summarization Service - API Core
//
// Extractive (sentence centrality) and abstractive (remote seq2seq model)
// summarization behind one HTTP API, plus ROUGE evaluation.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;
pub mod telemetry;

pub use config::*;
