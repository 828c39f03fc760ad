//! # Stock Watchlist SDK
//!
//! A Rust SDK for the stock watchlist API, for native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes and domain types (always available, WASM-safe)
//! 2. **HTTP** — The `Transport` seam and `WatchlistHttp`, which classifies every
//!    response against the `{code, message, data}` envelope
//! 3. **Client** — `WatchlistClient` with the `watchlist()` sub-client
//! 4. **Store** — `WatchlistStore`, the reactive mirror of server state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stock_watchlist_sdk::prelude::*;
//!
//! let client = WatchlistClient::builder()
//!     .base_url("http://localhost:8000/api")
//!     .build()?;
//!
//! let store = client.store();
//! store.fetch_watchlist(Some("u1")).await;
//! store.add_stock("u1", "600519").await?;
//! let hits = store.search_stocks("茅台").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and query helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, state, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network and default constants.
pub mod network;

/// Client configuration.
pub mod config;

/// User-facing notification seam.
pub mod notify;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Transport seam, response envelope, transport adapter.
pub mod http;

// ── Layer 3: Client ──────────────────────────────────────────────────────────

/// `WatchlistClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::StockCode;

    // Domain types — watchlist
    pub use crate::domain::watchlist::wire::MutationAck;
    pub use crate::domain::watchlist::{
        MarketType, StockItem, WatchlistResponse, WatchlistState, WatchlistStore,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError, TransportError};

    // Network + config
    pub use crate::config::ClientConfig;
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_USER_ID};

    // Notifications
    pub use crate::notify::{NoopNotifier, Notifier, Toast, ToastIcon, ToastKind, TracingNotifier};

    // HTTP
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
    pub use crate::http::{
        ApiResponse, Method, RequestOptions, Transport, TransportRequest, TransportResponse,
        WatchlistHttp,
    };

    // Client
    pub use crate::client::{WatchlistClient, WatchlistClientBuilder, WatchlistSubClient};
}
