//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use stock_watchlist_sdk::prelude::*;

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, body: Value) {
        self.push_raw(200, &body.to_string());
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(TransportResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_transport_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Other(message.to_string())));
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".into())))
    }
}

/// Each request waits on its own gate; the test decides when (and in which
/// order) responses arrive.
#[derive(Default)]
pub struct GatedTransport {
    gates: Mutex<VecDeque<oneshot::Receiver<Value>>>,
}

impl GatedTransport {
    /// Returns the transport and one sender per expected request, in request order.
    pub fn with_gates(n: usize) -> (Arc<Self>, Vec<oneshot::Sender<Value>>) {
        let transport = Arc::new(Self::default());
        let mut senders = Vec::with_capacity(n);
        for _ in 0..n {
            let (tx, rx) = oneshot::channel();
            transport.gates.lock().unwrap().push_back(rx);
            senders.push(tx);
        }
        (transport, senders)
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let gate = self.gates.lock().unwrap().pop_front();
        let Some(gate) = gate else {
            return Err(TransportError::Other("no gate left".into()));
        };
        let body = gate
            .await
            .map_err(|_| TransportError::Other("gate dropped".into()))?;
        Ok(TransportResponse {
            status: 200,
            body: body.to_string(),
        })
    }
}

/// Collects toasts for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn kinds(&self) -> Vec<ToastKind> {
        self.toasts.lock().unwrap().iter().map(|t| t.kind).collect()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: &Toast) {
        self.toasts.lock().unwrap().push(toast.clone());
    }
}

pub fn client_with(transport: Arc<dyn Transport>) -> WatchlistClient {
    WatchlistClient::builder()
        .base_url("http://localhost:8000/api")
        .transport(transport)
        .build()
        .unwrap()
}

pub fn store_with(
    transport: Arc<dyn Transport>,
    notifier: Arc<RecordingNotifier>,
) -> WatchlistStore {
    WatchlistStore::with_notifier(client_with(transport), notifier)
}

/// Envelope for `GET /watchlist`.
pub fn list_envelope(user_id: &str, stocks: Value, a: u32, hk: u32) -> Value {
    json!({
        "code": 0,
        "message": "success",
        "data": {
            "user_id": user_id,
            "stocks": stocks,
            "A_shares_count": a,
            "HK_stocks_count": hk
        }
    })
}

pub fn ack_envelope(message: &str) -> Value {
    json!({"code": 0, "message": "success", "data": {"message": message}})
}
