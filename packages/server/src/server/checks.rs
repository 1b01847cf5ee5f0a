//! Environment checks behind `textsum_cli check`.

use serde::Serialize;
use tracing::{error, info};

use crate::config::Config;
use crate::kernel::{AbstractiveSummarizer, BaseSummarizer, ExtractiveSummarizer};
use crate::server::static_files::embedded_assets;

const SAMPLE_TEXT: &str =
    "This is a test article. It has multiple sentences. We want to summarize it.";

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub ok: bool,
    /// Failing optional checks are reported but do not fail the run
    pub required: bool,
    pub message: String,
}

impl CheckResult {
    fn from_outcome(name: &'static str, required: bool, outcome: anyhow::Result<String>) -> Self {
        match outcome {
            Ok(message) => Self {
                name,
                ok: true,
                required,
                message,
            },
            Err(e) => Self {
                name,
                ok: false,
                required,
                message: format!("{:#}", e),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub success: bool,
    pub checks: Vec<CheckResult>,
}

impl CheckReport {
    /// Succeeds when every required check passed
    pub fn new(checks: Vec<CheckResult>) -> Self {
        Self {
            success: checks.iter().all(|c| c.ok || !c.required),
            checks,
        }
    }
}

/// Configuration, embedded form, extractive backend and (unless `offline`)
/// reachability of the inference endpoint
pub async fn run_checks(config: &Config, offline: bool) -> CheckReport {
    let mut checks = vec![CheckResult {
        name: "configuration",
        ok: true,
        required: true,
        message: format!(
            "env={} model={} port={} default_method={}",
            config.env, config.model_name, config.port, config.default_method
        ),
    }];

    let assets = embedded_assets();
    checks.push(CheckResult {
        name: "form_assets",
        ok: assets.iter().any(|a| a == "index.html"),
        required: true,
        message: format!("{} embedded file(s)", assets.len()),
    });

    let extractive = ExtractiveSummarizer::new()
        .summarize(SAMPLE_TEXT, Some(1))
        .await
        .and_then(|summary| {
            anyhow::ensure!(!summary.is_empty(), "Extractive backend returned an empty summary");
            Ok(summary)
        });
    checks.push(CheckResult::from_outcome("extractive_backend", true, extractive));

    if !offline {
        let abstractive = AbstractiveSummarizer::from_config(config);
        let probe = abstractive
            .probe()
            .await
            .map(|status| format!("{} answered HTTP {}", abstractive.endpoint(), status));
        checks.push(CheckResult::from_outcome("inference_endpoint", false, probe));
    }

    for check in &checks {
        if check.ok {
            info!(check = check.name, "OK");
        } else {
            error!(check = check.name, message = %check.message, "FAILED");
        }
    }

    CheckReport::new(checks)
}
