//! Shared newtypes and query helpers.
//!
//! Newtypes here serialize exactly like the raw backend value.

pub mod query;

pub use query::{append_query, encode_query};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── StockCode ───────────────────────────────────────────────────────────────

/// Newtype for exchange-qualified stock codes (e.g. `"600519"`, `"00700"`).
///
/// Unique within a market. Kept exactly as the backend sends it; leading zeros
/// are significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockCode(String);

impl StockCode {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StockCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StockCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StockCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for StockCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StockCode(s.to_string()))
    }
}

impl AsRef<str> for StockCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
