//! Transport adapter — `WatchlistHttp`.
//!
//! Turns `(path, RequestOptions)` into one [`Transport`] call and classifies the
//! result against the envelope. This is the only place raw transport failures and
//! non-zero envelope codes are translated into [`HttpError`].

use crate::error::HttpError;
use crate::http::envelope::{decode_envelope, ApiResponse};
use crate::http::transport::{Method, Transport, TransportRequest};
use crate::shared::{append_query, encode_query};

use http1::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http1::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing;

pub const APPLICATION_JSON: &str = "application/json";

/// Per-call options: method (default GET), data, extra headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    /// Query parameters for GET, JSON body otherwise.
    pub data: Option<Value>,
    /// Override the client headers key-by-key. Checked when the request is built.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Serialize `data` and attach it.
    pub fn with_data<D: Serialize + ?Sized>(self, data: &D) -> Result<Self, HttpError> {
        let value = serde_json::to_value(data).map_err(|e| HttpError::Encode(e.to_string()))?;
        Ok(self.data(value))
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Low-level HTTP client for the watchlist REST API.
#[derive(Clone)]
pub struct WatchlistHttp {
    base_url: String,
    transport: Arc<dyn Transport>,
    /// `Content-Type: application/json` unless overridden.
    headers: HeaderMap,
}

impl std::fmt::Debug for WatchlistHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchlistHttp")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl WatchlistHttp {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            headers,
        }
    }

    /// Layer client-wide headers over the JSON default.
    pub fn with_headers(mut self, headers: &[(String, String)]) -> Result<Self, HttpError> {
        self.headers = merge_headers(&self.headers, headers)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    // ── Verb helpers ─────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        data: Option<&D>,
    ) -> Result<ApiResponse<T>, HttpError> {
        self.send_with(Method::Get, path, data).await
    }

    pub async fn post<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        data: Option<&D>,
    ) -> Result<ApiResponse<T>, HttpError> {
        self.send_with(Method::Post, path, data).await
    }

    pub async fn put<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        data: Option<&D>,
    ) -> Result<ApiResponse<T>, HttpError> {
        self.send_with(Method::Put, path, data).await
    }

    pub async fn delete<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        data: Option<&D>,
    ) -> Result<ApiResponse<T>, HttpError> {
        self.send_with(Method::Delete, path, data).await
    }

    async fn send_with<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        data: Option<&D>,
    ) -> Result<ApiResponse<T>, HttpError> {
        let mut options = RequestOptions::new(method);
        if let Some(d) = data {
            options = options.with_data(d)?;
        }
        self.request(path, options).await
    }

    // ── Core ─────────────────────────────────────────────────────────────

    /// Issue exactly one transport call and classify the envelope.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>, HttpError> {
        let request = self.build_request(path, options)?;
        let method = request.method;
        let url = request.url.clone();

        tracing::debug!(method = %method, url = %url, "Sending request");

        let response = match self.transport.send(request).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(method = %method, url = %url, error = %e, "Transport failure");
                return Err(HttpError::Transport(e));
            }
        };

        decode_envelope(&response.body).inspect_err(|e| {
            tracing::warn!(
                method = %method,
                url = %url,
                status = response.status,
                error = %e,
                "Request rejected"
            );
        })
    }

    pub(crate) fn build_request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<TransportRequest, HttpError> {
        let RequestOptions {
            method,
            data,
            headers,
        } = options;

        let headers = merge_headers(&self.headers, &headers)?;

        let mut url = format!("{}{}", self.base_url, path);
        let body = if method == Method::Get {
            if let Some(d) = &data {
                let query = encode_query(d).map_err(|e| HttpError::Encode(e.to_string()))?;
                url = append_query(&url, &query);
            }
            None
        } else {
            data
        };

        Ok(TransportRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

/// Overlay `overrides` onto `base`. Names compare case-insensitively and a
/// later value replaces an earlier one.
pub fn merge_headers(
    base: &HeaderMap,
    overrides: &[(String, String)],
) -> Result<HeaderMap, HttpError> {
    let mut merged = base.clone();
    for (name, value) in overrides {
        let (name, value) = parse_header(name, value)?;
        merged.insert(name, value);
    }
    Ok(merged)
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), HttpError> {
    let invalid = |reason: String| HttpError::InvalidHeader {
        name: name.to_string(),
        reason,
    };
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
    let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
    Ok((header_name, header_value))
}
