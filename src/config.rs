use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Catalog API used when no seed file is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
/// Seconds before an HTTP request to the catalog is abandoned
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the showcase.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the remote catalog API.
    pub api_url: String,
    /// JSON snapshot to serve from memory instead of the remote catalog.
    pub seed_file: Option<PathBuf>,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            seed_file: None,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::from_env()?;
        tracing::debug!(
            api_url = %config.api_url,
            seed_file = ?config.seed_file,
            timeout_secs = config.http_timeout.as_secs(),
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let http_timeout = optional("ESTATE_HTTP_TIMEOUT_SECS")
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ConfigError::InvalidValue("ESTATE_HTTP_TIMEOUT_SECS".into()))
            })
            .transpose()?
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Ok(Self {
            api_url: optional("ESTATE_API_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            seed_file: optional("ESTATE_SEED_FILE").map(PathBuf::from),
            http_timeout: Duration::from_secs(http_timeout),
        })
    }
}
