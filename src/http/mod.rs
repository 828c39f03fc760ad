//! HTTP layer — the transport seam, the response envelope, and `WatchlistHttp`.

pub mod client;
pub mod envelope;
pub mod transport;

pub use client::{merge_headers, RequestOptions, WatchlistHttp};
pub use envelope::ApiResponse;
pub use http1::HeaderMap;
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{Method, Transport, TransportRequest, TransportResponse};
