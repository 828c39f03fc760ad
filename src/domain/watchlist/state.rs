//! Watchlist store — app-owned, SDK-provided sync logic.
//!
//! Mirrors the server's watchlist into local state the UI can read or watch.
//! Every mutation is followed by a full re-fetch; nothing is updated
//! optimistically.

use super::{StockItem, WatchlistResponse};
use crate::client::WatchlistClient;
use crate::error::SdkError;
use crate::notify::{Notifier, Toast, ToastKind, TracingNotifier};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing;

/// Everything the UI renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WatchlistState {
    /// `None` before the first successful fetch.
    pub watchlist_data: Option<WatchlistResponse>,
    pub loading: bool,
}

/// Reactive watchlist store.
///
/// Clones share state. Fetches are sequenced: only the most recently started
/// fetch may write `watchlist_data` or clear `loading`, so an older response
/// that settles late never overwrites a newer one.
#[derive(Clone)]
pub struct WatchlistStore {
    client: WatchlistClient,
    notifier: Arc<dyn Notifier>,
    state: Arc<watch::Sender<WatchlistState>>,
    latest_fetch: Arc<AtomicU64>,
}

impl std::fmt::Debug for WatchlistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchlistStore")
            .field("state", &*self.state.borrow())
            .field("latest_fetch", &self.latest_fetch.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl WatchlistStore {
    pub fn new(client: WatchlistClient) -> Self {
        Self::with_notifier(client, Arc::new(TracingNotifier))
    }

    pub fn with_notifier(client: WatchlistClient, notifier: Arc<dyn Notifier>) -> Self {
        let (state, _) = watch::channel(WatchlistState::default());
        Self {
            client,
            notifier,
            state: Arc::new(state),
            latest_fetch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn client(&self) -> &WatchlistClient {
        &self.client
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> WatchlistState {
        self.state.borrow().clone()
    }

    pub fn watchlist_data(&self) -> Option<WatchlistResponse> {
        self.state.borrow().watchlist_data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Receiver that wakes on every state change.
    pub fn subscribe(&self) -> watch::Receiver<WatchlistState> {
        self.state.subscribe()
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// Load the watchlist. Failures keep the previous data and raise a
    /// [`ToastKind::FetchFailed`] toast; they are not returned.
    pub async fn fetch_watchlist(&self, user_id: Option<&str>) {
        let seq = self.latest_fetch.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|s| s.loading = true);
        let _guard = LoadingGuard { store: self, seq };

        let result = self.client.watchlist().get_list(user_id).await;

        if !self.is_latest(seq) {
            tracing::warn!(seq, ok = result.is_ok(), "Discarding stale watchlist fetch");
            return;
        }

        match result {
            Ok(resp) => {
                self.state.send_modify(|s| {
                    s.watchlist_data = resp.data;
                    s.loading = false;
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch watchlist");
                self.state.send_modify(|s| s.loading = false);
                self.notify(ToastKind::FetchFailed);
            }
        }
    }

    /// Add a stock, then re-fetch. Failures are toasted and returned.
    pub async fn add_stock(&self, user_id: &str, stock_code: &str) -> Result<(), SdkError> {
        match self.client.watchlist().add(user_id, stock_code).await {
            Ok(_) => {
                self.notify(ToastKind::Added);
                self.fetch_watchlist(Some(user_id)).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, stock_code, "Failed to add stock");
                self.notify(ToastKind::AddFailed);
                Err(e)
            }
        }
    }

    /// Remove a stock, then re-fetch. Failures are toasted and returned.
    pub async fn remove_stock(&self, user_id: &str, stock_code: &str) -> Result<(), SdkError> {
        match self.client.watchlist().remove(user_id, stock_code).await {
            Ok(_) => {
                self.notify(ToastKind::Removed);
                self.fetch_watchlist(Some(user_id)).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, stock_code, "Failed to remove stock");
                self.notify(ToastKind::RemoveFailed);
                Err(e)
            }
        }
    }

    /// Search stocks. No toast on failure; the caller owns search feedback.
    pub async fn search_stocks(&self, keyword: &str) -> Result<Vec<StockItem>, SdkError> {
        match self.client.watchlist().search(keyword).await {
            Ok(resp) => Ok(resp.data.unwrap_or_default()),
            Err(e) => {
                tracing::error!(error = %e, keyword, "Stock search failed");
                Err(e)
            }
        }
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.latest_fetch.load(Ordering::SeqCst) == seq
    }

    fn notify(&self, kind: ToastKind) {
        self.notifier.notify(&Toast::new(kind));
    }
}

/// Clears `loading` when the owning fetch ends, however it ends (including
/// the future being dropped), provided no newer fetch has started since.
struct LoadingGuard<'a> {
    store: &'a WatchlistStore,
    seq: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.store.is_latest(self.seq) {
            return;
        }
        self.store.state.send_if_modified(|s| {
            let was_loading = s.loading;
            s.loading = false;
            was_loading
        });
    }
}
