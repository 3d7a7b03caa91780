//! Realtime channel (Server-Sent Events)
//!
//! `GET /events` keeps a connection open and streams broadcast events to the
//! client. Connects and disconnects are logged; no page currently publishes
//! anything on the channel, so the stream only carries keep-alives until a
//! publisher appears.

use axum::{
    Router,
    extract::State,
    response::{
        IntoResponse,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use serde::Serialize;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tokio::sync::broadcast;
use tracing::info;

/// An event published on the realtime channel
#[derive(Debug, Clone, Serialize)]
pub struct RealtimeEvent {
    /// Event kind, e.g. "content-updated"
    pub kind: String,
    /// Arbitrary JSON payload
    pub payload: serde_json::Value,
}

/// Shared state of the realtime channel
#[derive(Clone)]
pub struct RealtimeState {
    tx: broadcast::Sender<RealtimeEvent>,
    next_client_id: Arc<AtomicU64>,
}

impl RealtimeState {
    pub fn new() -> Self {
        Self {
            tx: broadcast::channel(64).0,
            next_client_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Subscribe to events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<RealtimeEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all connected clients
    ///
    /// Dropped silently when nobody is connected.
    pub fn publish(&self, event: RealtimeEvent) {
        let _ = self.tx.send(event);
    }

    /// Number of currently subscribed clients
    pub fn client_count(&self) -> usize {
        self.tx.receiver_count()
    }

    fn next_client_id(&self) -> u64 {
        self.next_client_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for RealtimeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs the disconnect when the event stream is dropped
struct ConnectionGuard {
    client_id: u64,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        info!(client_id = self.client_id, "Realtime client disconnected");
    }
}

/// SSE handler for `GET /events`
pub async fn events(State(state): State<RealtimeState>) -> impl IntoResponse {
    let client_id = state.next_client_id();
    info!(client_id, "Realtime client connected");

    let mut rx = state.subscribe();
    let stream = async_stream::stream! {
        let _guard = ConnectionGuard { client_id };
        while let Ok(event) = rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => yield Ok::<_, axum::Error>(Event::default().data(json)),
                Err(_) => continue,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Router exposing the realtime channel
pub fn create_router(state: RealtimeState) -> Router {
    Router::new().route("/events", get(events)).with_state(state)
}
