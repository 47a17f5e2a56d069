//! In-process pub/sub bus for real-time event delivery.
//!
//! Topic-keyed broadcast channels feeding the GraphQL subscription and SSE
//! endpoints. Topics are opaque strings; payloads are `serde_json::Value`
//! and domains serialize their own types. The bus is injected (never a
//! module-global), so multiple independent server instances can coexist in
//! tests.
//!
//! Delivery contract: an event reaches every subscriber attached at publish
//! time, exactly once, with no replay of history to later subscribers. A
//! publish with no subscribers is a no-op.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Topic-keyed broadcast bus. Thread-safe, cloneable.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<RwLock<HashMap<String, broadcast::Sender<serde_json::Value>>>>,
    capacity: usize,
}

impl EventBus {
    /// Create a bus with default per-topic capacity (256 events).
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a bus with the given per-topic channel capacity.
    ///
    /// A subscriber that falls more than `capacity` events behind observes
    /// a lag error instead of the missed events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            capacity,
        }
    }

    /// Publish a JSON value to a topic. No-op if no subscribers.
    pub async fn publish(&self, topic: &str, value: serde_json::Value) {
        let channels = self.channels.read().await;
        if let Some(tx) = channels.get(topic) {
            // Ignore send errors (no active receivers)
            let _ = tx.send(value);
        }
    }

    /// Subscribe to a topic. Creates the channel if it doesn't exist.
    pub async fn subscribe(&self, topic: &str) -> broadcast::Receiver<serde_json::Value> {
        let mut channels = self.channels.write().await;
        let tx = channels
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0);
        tx.subscribe()
    }

    /// Number of live subscribers on a topic.
    pub async fn subscriber_count(&self, topic: &str) -> usize {
        let channels = self.channels.read().await;
        channels.get(topic).map_or(0, |tx| tx.receiver_count())
    }

    /// Remove channels with zero subscribers (housekeeping).
    pub async fn cleanup(&self) {
        let mut channels = self.channels.write().await;
        channels.retain(|_, tx| tx.receiver_count() > 0);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
