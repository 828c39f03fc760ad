//! Watchlist domain — stocks a user follows, grouped by market.

pub mod client;
pub mod state;
pub mod wire;

use crate::shared::StockCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::{WatchlistState, WatchlistStore};

// ─── MarketType ──────────────────────────────────────────────────────────────

/// Market a stock is listed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketType {
    /// Shanghai / Shenzhen A-shares.
    #[serde(rename = "A")]
    AShare,
    /// Hong Kong.
    #[serde(rename = "HK")]
    HkStock,
}

impl MarketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AShare => "A",
            Self::HkStock => "HK",
        }
    }
}

impl std::fmt::Display for MarketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── StockItem ───────────────────────────────────────────────────────────────

/// One stock in a watchlist or search result.
///
/// `current_price` and `change` are absent when no quote is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub code: StockCode,
    pub name: String,
    pub market: MarketType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
    /// Percentage change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<Decimal>,
}

impl StockItem {
    pub fn has_quote(&self) -> bool {
        self.current_price.is_some()
    }
}

// ─── WatchlistResponse ───────────────────────────────────────────────────────

/// A user's full watchlist as the server reports it.
///
/// Stock order is server-defined and may change between calls. The two count
/// fields are taken as sent; see [`counts_consistent`](Self::counts_consistent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistResponse {
    pub user_id: String,
    pub stocks: Vec<StockItem>,
    #[serde(rename = "A_shares_count", default)]
    pub a_shares_count: u32,
    #[serde(rename = "HK_stocks_count", default)]
    pub hk_stocks_count: u32,
}

impl WatchlistResponse {
    /// Count of `stocks` in `market`, computed locally.
    pub fn count_for(&self, market: MarketType) -> usize {
        self.stocks.iter().filter(|s| s.market == market).count()
    }

    /// Whether the server-sent counts match the stock list.
    pub fn counts_consistent(&self) -> bool {
        self.count_for(MarketType::AShare) == self.a_shares_count as usize
            && self.count_for(MarketType::HkStock) == self.hk_stocks_count as usize
    }

    pub fn contains(&self, code: &str) -> bool {
        self.stocks.iter().any(|s| s.code.as_str() == code)
    }

    pub fn get(&self, code: &str) -> Option<&StockItem> {
        self.stocks.iter().find(|s| s.code.as_str() == code)
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}
