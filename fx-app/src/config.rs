//! Configuration loading from environment.

use std::env;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub provider_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()?;

        let database_url = lookup("FX_DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("FX_DATABASE_URL environment variable is required"))?;

        let provider_url =
            lookup("FX_PROVIDER_URL").unwrap_or_else(|| fx_provider::DEFAULT_BASE_URL.to_string());

        let timeout = match lookup("FX_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(secs.parse()?),
            None => fx_provider::DEFAULT_TIMEOUT,
        };

        Ok(Self {
            port,
            database_url,
            provider_url,
            timeout,
        })
    }
}
