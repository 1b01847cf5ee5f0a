use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;

use crate::domains::summarization::models::SummarizationMethod;

pub const DEFAULT_ENV: &str = "dev";
pub const DEFAULT_MODEL_NAME: &str = "facebook/bart-large-cnn";
pub const DEFAULT_MAX_INPUT_TOKENS: usize = 2048;
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment name reported by `/health`
    pub env: String,
    pub model_name: String,
    pub max_input_tokens: usize,
    pub port: u16,
    pub log_level: String,
    pub host: String,
    pub default_method: SummarizationMethod,
    pub inference_url: String,
    pub inference_api_token: Option<String>,
    pub inference_timeout: Duration,
    /// Reject inputs longer than `max_input_tokens` when set
    pub enforce_input_limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: DEFAULT_ENV.to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            max_input_tokens: DEFAULT_MAX_INPUT_TOKENS,
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            host: DEFAULT_HOST.to_string(),
            default_method: SummarizationMethod::Extractive,
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            inference_api_token: None,
            inference_timeout: Duration::from_secs(DEFAULT_INFERENCE_TIMEOUT_SECS),
            enforce_input_limit: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Absent variables fall back to defaults. Present but malformed values
    /// are an error so a bad deployment fails at startup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let inference_timeout_secs: u64 = get(
            "INFERENCE_TIMEOUT_SECS",
            &DEFAULT_INFERENCE_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .context("INFERENCE_TIMEOUT_SECS must be a valid number of seconds")?;

        Ok(Self {
            env: get("ENV", DEFAULT_ENV),
            model_name: get("MODEL_NAME", DEFAULT_MODEL_NAME),
            max_input_tokens: get("MAX_INPUT_TOKENS", &DEFAULT_MAX_INPUT_TOKENS.to_string())
                .parse()
                .context("MAX_INPUT_TOKENS must be a valid number")?,
            port: get("PORT", &DEFAULT_PORT.to_string())
                .parse()
                .context("PORT must be a valid number")?,
            log_level: get("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            host: get("API_HOST", DEFAULT_HOST),
            default_method: get("SUMMARIZATION_METHOD", SummarizationMethod::Extractive.as_str())
                .parse()
                .context("SUMMARIZATION_METHOD must be 'extractive' or 'abstractive'")?,
            inference_url: get("INFERENCE_URL", DEFAULT_INFERENCE_URL)
                .trim_end_matches('/')
                .to_string(),
            inference_api_token: lookup("HF_API_TOKEN").filter(|t| !t.trim().is_empty()),
            inference_timeout: Duration::from_secs(inference_timeout_secs),
            enforce_input_limit: parse_bool(&get("ENFORCE_INPUT_LIMIT", "false"))
                .context("ENFORCE_INPUT_LIMIT must be true or false")?,
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default tracing filter derived from `LOG_LEVEL` (used when `RUST_LOG` is unset)
    pub fn log_filter(&self) -> String {
        let level = match self.log_level.to_ascii_lowercase().as_str() {
            "critical" | "fatal" => "error".to_string(),
            "warning" => "warn".to_string(),
            other => other.to_string(),
        };
        format!("{level},tower_http=info")
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow!("invalid boolean value: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.env, "dev");
        assert_eq!(config.model_name, "facebook/bart-large-cnn");
        assert_eq!(config.max_input_tokens, 2048);
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.default_method, SummarizationMethod::Extractive);
        assert!(!config.enforce_input_limit);
        assert!(config.inference_api_token.is_none());
        assert_eq!(config.inference_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("ENV", "prod"),
            ("PORT", "9001"),
            ("MAX_INPUT_TOKENS", "512"),
            ("SUMMARIZATION_METHOD", "abstractive"),
            ("ENFORCE_INPUT_LIMIT", "true"),
            ("INFERENCE_URL", "http://localhost:8080/models/"),
        ])
        .unwrap();
        assert_eq!(config.env, "prod");
        assert_eq!(config.port, 9001);
        assert_eq!(config.max_input_tokens, 512);
        assert_eq!(config.default_method, SummarizationMethod::Abstractive);
        assert!(config.enforce_input_limit);
        assert_eq!(config.inference_url, "http://localhost:8080/models");
        assert_eq!(config.bind_address(), "0.0.0.0:9001");
    }

    #[test]
    fn test_malformed_port_fails() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_malformed_max_input_tokens_fails() {
        assert!(config_from(&[("MAX_INPUT_TOKENS", "-1")]).is_err());
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = config_from(&[("HF_API_TOKEN", "  ")]).unwrap();
        assert!(config.inference_api_token.is_none());
    }

    #[test]
    fn test_log_filter_maps_python_style_levels() {
        let config = config_from(&[("LOG_LEVEL", "WARNING")]).unwrap();
        assert_eq!(config.log_filter(), "warn,tower_http=info");
    }
}
