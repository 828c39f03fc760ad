//! Watchlist sub-client — list, add, remove, search.
//!
//! Stateless one-to-one mapping onto the transport adapter. No validation and no
//! error handling of its own.

use crate::client::WatchlistClient;
use crate::domain::watchlist::wire::{
    AddWatchlistRequest, ListParams, MutationAck, RemoveWatchlistRequest, SearchParams,
};
use crate::domain::watchlist::{StockItem, WatchlistResponse};
use crate::error::SdkError;
use crate::http::ApiResponse;
use crate::network::DEFAULT_USER_ID;

pub const WATCHLIST_PATH: &str = "/watchlist";
pub const SEARCH_PATH: &str = "/watchlist/search";

pub struct Watchlist<'a> {
    pub(crate) client: &'a WatchlistClient,
}

impl<'a> Watchlist<'a> {
    /// `GET /watchlist?user_id=…`, defaulting to [`DEFAULT_USER_ID`].
    pub async fn get_list(
        &self,
        user_id: Option<&str>,
    ) -> Result<ApiResponse<WatchlistResponse>, SdkError> {
        let params = ListParams {
            user_id: user_id.unwrap_or(DEFAULT_USER_ID),
        };
        Ok(self.client.http.get(WATCHLIST_PATH, Some(&params)).await?)
    }

    /// `POST /watchlist` with `{user_id, stock_code}`.
    pub async fn add(
        &self,
        user_id: &str,
        stock_code: &str,
    ) -> Result<ApiResponse<MutationAck>, SdkError> {
        let body = AddWatchlistRequest {
            user_id: user_id.to_string(),
            stock_code: stock_code.to_string(),
        };
        Ok(self.client.http.post(WATCHLIST_PATH, Some(&body)).await?)
    }

    /// `DELETE /watchlist` with `{user_id, stock_code}` in the body.
    pub async fn remove(
        &self,
        user_id: &str,
        stock_code: &str,
    ) -> Result<ApiResponse<MutationAck>, SdkError> {
        let body = RemoveWatchlistRequest {
            user_id: user_id.to_string(),
            stock_code: stock_code.to_string(),
        };
        Ok(self.client.http.delete(WATCHLIST_PATH, Some(&body)).await?)
    }

    /// `GET /watchlist/search?keyword=…`.
    pub async fn search(&self, keyword: &str) -> Result<ApiResponse<Vec<StockItem>>, SdkError> {
        let params = SearchParams { keyword };
        Ok(self.client.http.get(SEARCH_PATH, Some(&params)).await?)
    }
}
