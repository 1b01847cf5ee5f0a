// Business domains
pub mod summarization;
