//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::client::http::DEFAULT_BASE_URL;
use crate::generator::SampleDataPreset;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Ledger v2 API base URL
    pub ledger_api_url: String,

    /// Optional bearer token for the ledger API
    pub ledger_api_token: Option<String>,

    /// Per-request timeout for ledger API calls
    pub request_timeout: Duration,

    /// Preset used when no explicit sizes are given
    pub preset: SampleDataPreset,

    /// Seed for reproducible generation
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ledger_api_url = lookup("LEDGER_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !ledger_api_url.starts_with("http://") && !ledger_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue("LEDGER_API_URL"));
        }

        let ledger_api_token = lookup("LEDGER_API_TOKEN").filter(|t| !t.is_empty());

        let request_timeout_secs: u64 = lookup("LEDGER_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("LEDGER_REQUEST_TIMEOUT_SECS"))?;

        let preset = lookup("SAMPLE_PRESET")
            .unwrap_or_else(|| "medium".to_string())
            .parse::<SampleDataPreset>()
            .map_err(|_| ConfigError::InvalidValue("SAMPLE_PRESET"))?;

        let seed = lookup("SAMPLE_SEED")
            .map(|s| s.parse::<u64>())
            .transpose()
            .map_err(|_| ConfigError::InvalidValue("SAMPLE_SEED"))?;

        Ok(Self {
            ledger_api_url,
            ledger_api_token,
            request_timeout: Duration::from_secs(request_timeout_secs),
            preset,
            seed,
        })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
