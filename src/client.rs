//! High-level client — `WatchlistClient` with nested sub-client accessors.
//!
//! The watchlist sub-client lives in `domain/watchlist/client.rs`. This module
//! keeps the builder and the accessor.

use crate::config::ClientConfig;
use crate::domain::watchlist::client::Watchlist;
use crate::domain::watchlist::WatchlistStore;
use crate::error::SdkError;
use crate::http::{Transport, WatchlistHttp};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::watchlist::client::Watchlist as WatchlistSubClient;

/// The primary entry point for the SDK.
#[derive(Debug, Clone)]
pub struct WatchlistClient {
    pub(crate) http: WatchlistHttp,
}

impl WatchlistClient {
    pub fn builder() -> WatchlistClientBuilder {
        WatchlistClientBuilder::default()
    }

    /// Build from a [`ClientConfig`] with the default transport.
    pub fn from_config(config: ClientConfig) -> Result<Self, SdkError> {
        Self::builder().config(config).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn watchlist(&self) -> Watchlist<'_> {
        Watchlist { client: self }
    }

    /// Low-level adapter, for endpoints the sub-clients do not cover.
    pub fn http(&self) -> &WatchlistHttp {
        &self.http
    }

    /// A new store sharing this client's transport.
    pub fn store(&self) -> WatchlistStore {
        WatchlistStore::new(self.clone())
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct WatchlistClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl WatchlistClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    /// Host transport timeout. Only applies to the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a header sent with every request (overrides the JSON default).
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.push((name.into(), value.into()));
        self
    }

    /// Replace all settings at once.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom host request primitive instead of the default one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<WatchlistClient, SdkError> {
        let transport = match self.transport {
            Some(t) => t,
            None => default_transport(self.config.timeout)?,
        };

        let http = WatchlistHttp::new(&self.config.base_url, transport)
            .with_headers(&self.config.headers)?;

        Ok(WatchlistClient { http })
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Duration) -> Result<Arc<dyn Transport>, SdkError> {
    let transport = crate::http::ReqwestTransport::new(timeout)
        .map_err(|e| SdkError::Other(format!("Failed to build HTTP client: {e}")))?;
    Ok(Arc::new(transport))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Duration) -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Config(
        "no transport configured; enable the `http` feature or call `transport()`".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::DEFAULT_API_URL;

    #[cfg(feature = "http")]
    #[test]
    fn test_default_build_targets_local_api() {
        let client = WatchlistClient::builder().build().unwrap();
        assert_eq!(client.http().base_url(), DEFAULT_API_URL);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_builder_trims_and_collects_headers() {
        let client = WatchlistClient::builder()
            .base_url("https://watch.example.com/api/")
            .timeout(Duration::from_secs(5))
            .header("X-Platform", "h5")
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "https://watch.example.com/api");
        let headers = client.http().headers();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert_eq!(headers.get("x-platform").unwrap(), "h5");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_builder_rejects_bad_header() {
        let err = WatchlistClient::builder()
            .header("", "value")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Http(crate::error::HttpError::InvalidHeader { .. })
        ));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_builder_rejects_control_byte_in_header_value() {
        let err = WatchlistClient::builder()
            .header("X-Trace", "a\u{1}b")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Http(crate::error::HttpError::InvalidHeader { .. })
        ));
    }
}
