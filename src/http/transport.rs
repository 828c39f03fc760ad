//! The host request primitive, treated as a black box.
//!
//! [`WatchlistHttp`](super::WatchlistHttp) only ever talks to a [`Transport`].
//! The default implementation is [`ReqwestTransport`] (feature `http`); tests and
//! embedders can plug in their own.

use crate::error::TransportError;

use async_trait::async_trait;
use http1::HeaderMap;
use serde_json::Value;

/// HTTP method accepted by the watchlist API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully resolved request: absolute URL, merged headers, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl TransportRequest {
    /// Case-insensitive header lookup. Values that are not visible ASCII read
    /// as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Whatever the host handed back. Status is informational only: the envelope
/// in `body` decides success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// One asynchronous network call per invocation. No retry, no caching.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

// ─── reqwest ─────────────────────────────────────────────────────────────────

#[cfg(feature = "http")]
pub use reqwest_transport::ReqwestTransport;

#[cfg(feature = "http")]
mod reqwest_transport {
    use super::{Method, Transport, TransportRequest, TransportResponse};
    use crate::error::TransportError;

    use async_trait::async_trait;
    use reqwest::Client;
    use std::time::Duration;

    /// [`Transport`] backed by a pooled `reqwest::Client`.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        /// Build a client with the given host-level timeout (ignored on WASM,
        /// where the browser owns timeouts).
        pub fn new(timeout: Duration) -> Result<Self, TransportError> {
            let mut builder = Client::builder();
            #[cfg(not(target_arch = "wasm32"))]
            {
                builder = builder.timeout(timeout).pool_max_idle_per_host(10);
            }
            #[cfg(target_arch = "wasm32")]
            let _ = timeout;

            Ok(Self {
                client: builder.build()?,
            })
        }

        pub fn from_client(client: Client) -> Self {
            Self { client }
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    impl Transport for ReqwestTransport {
        async fn send(
            &self,
            request: TransportRequest,
        ) -> Result<TransportResponse, TransportError> {
            let TransportRequest {
                method,
                url,
                headers,
                body,
            } = request;

            let method = match method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut req = self.client.request(method, url).headers(headers);
            if let Some(body) = body {
                req = req.body(body.to_string());
            }

            let resp = req.send().await?;
            let status = resp.status().as_u16();
            let body = resp.text().await?;

            Ok(TransportResponse { status, body })
        }
    }
}
