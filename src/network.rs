//! Network constants for the watchlist API.

/// Default REST API base URL (the `/api` prefix is part of the base).
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// User id sent when the caller does not name one.
pub const DEFAULT_USER_ID: &str = "default_user";

/// Default host transport timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
