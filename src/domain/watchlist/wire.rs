//! Wire types for watchlist requests and mutation payloads (REST).

use serde::{Deserialize, Serialize};

/// Query for `GET /watchlist`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListParams<'a> {
    pub user_id: &'a str,
}

/// Query for `GET /watchlist/search`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchParams<'a> {
    pub keyword: &'a str,
}

/// Body for `POST /watchlist`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddWatchlistRequest {
    pub user_id: String,
    pub stock_code: String,
}

/// Body for `DELETE /watchlist`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveWatchlistRequest {
    pub user_id: String,
    pub stock_code: String,
}

/// Payload of a successful add/remove. The server may also send none at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationAck {
    #[serde(default)]
    pub message: Option<String>,
}
