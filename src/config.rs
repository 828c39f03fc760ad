//! Client configuration, with environment overrides.
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `WATCHLIST_API_URL` | `base_url` | [`DEFAULT_API_URL`] |
//! | `WATCHLIST_TIMEOUT_SECS` | `timeout` | [`DEFAULT_TIMEOUT_SECS`] |

use crate::error::SdkError;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

use std::path::Path;
use std::time::Duration;

pub const ENV_API_URL: &str = "WATCHLIST_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "WATCHLIST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Sent with every request, layered over `Content-Type: application/json`.
    pub headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            headers: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by the process environment, after loading `.env`
    /// if one exists. A `.env` that exists but does not parse is an error.
    pub fn from_env() -> Result<Self, SdkError> {
        load_dotenv(dotenvy::dotenv())?;
        Self::from_process_env()
    }

    /// Like [`from_env`](Self::from_env), reading the given file instead of
    /// searching for `.env`.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, SdkError> {
        load_dotenv(dotenvy::from_path(path.as_ref()))?;
        Self::from_process_env()
    }

    fn from_process_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                SdkError::Config(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got '{raw}'"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn load_dotenv<T>(result: dotenvy::Result<T>) -> Result<(), SdkError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(SdkError::Config(format!("Failed to load .env: {e}"))),
    }
}
