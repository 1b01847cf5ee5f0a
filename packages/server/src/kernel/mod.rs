//! Kernel module - summarization backends and dependency container.

pub mod abstractive;
pub mod deps;
pub mod extractive;
pub mod rouge;
pub mod test_dependencies;
pub mod text;
pub mod traits;

pub use abstractive::AbstractiveSummarizer;
pub use deps::ServerDeps;
pub use extractive::{ExtractiveSummarizer, DEFAULT_NUM_SENTENCES};
pub use rouge::{RougeScorer, RougeScores, Score};
pub use test_dependencies::{MockSummarizer, TestDependencies};
pub use traits::*;
