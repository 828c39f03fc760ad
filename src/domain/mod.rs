//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types as the app consumes them
//! - `wire.rs` — Raw serde structs matching backend requests and payloads
//! - `state.rs` — The reactive store that mirrors server state
//! - `client.rs` — Sub-client with one method per endpoint

pub mod watchlist;
