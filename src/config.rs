use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. `BASEURL` and `APIKEY` are
    /// required and must be non-empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("{key} is not set")))
        };

        Ok(Config {
            base_url: required("BASEURL")?.trim_end_matches('/').to_string(),
            api_key: required("APIKEY")?,
            http_timeout: Duration::from_secs(
                lookup("HTTP_TIMEOUT")
                    .and_then(|value| value.parse().ok())
                    .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            ),
        })
    }
}

// The API key must never reach the logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &"<REDACTED>")
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
