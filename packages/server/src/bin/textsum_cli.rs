//! CLI for summarizing and scoring text without the HTTP server
//!
//! Also runs environment checks (configuration, embedded form, backends)
//! and prints a JSON report.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use textsum_core::domains::summarization::{self, SummarizationMethod, SummarizeRequest};
use textsum_core::kernel::{BaseScorer, RougeScorer, ServerDeps};
use textsum_core::server::checks::run_checks;
use textsum_core::telemetry::init_tracing;
use textsum_core::Config;

#[derive(Parser)]
#[command(name = "textsum_cli")]
#[command(about = "Summarize and evaluate text from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a file (or stdin when no file is given)
    Summarize {
        #[arg(long)]
        file: Option<PathBuf>,
        /// extractive or abstractive (defaults to SUMMARIZATION_METHOD)
        #[arg(long)]
        method: Option<SummarizationMethod>,
        /// Sentence budget (extractive) or max length (abstractive)
        #[arg(long)]
        sentences: Option<u32>,
    },

    /// Print ROUGE scores of a generated summary against a reference
    Score {
        #[arg(long)]
        reference: String,
        #[arg(long)]
        generated: String,
    },

    /// Verify configuration, embedded assets and backends
    Check {
        /// Skip probing the remote inference endpoint
        #[arg(long)]
        offline: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config);

    match cli.command {
        Commands::Summarize {
            file,
            method,
            sentences,
        } => {
            let text = read_input(file)?;
            let mut request = SummarizeRequest::new(text);
            request.max_sentences = sentences;
            request.method = method;

            let deps = ServerDeps::from_config(&config);
            let response = summarization::summarize_text(&request, &config, &deps).await?;
            println!("{}", response.summary);
        }
        Commands::Score {
            reference,
            generated,
        } => {
            let scores = RougeScorer::new().score(&reference, &generated);
            println!("{}", serde_json::to_string_pretty(&scores)?);
        }
        Commands::Check { offline } => {
            let report = run_checks(&config, offline).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.success {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
