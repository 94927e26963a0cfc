//! Realtime fan-out to live client connections.
//!
//! Connections register an unbounded sender keyed by connection id;
//! delivery is at-most-once and best-effort. Senders whose receiving
//! task has gone away are pruned during broadcast.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use serde_json::json;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::config::{EVENT_TEST, EVENT_TEST_MESSAGE};
use crate::services::UserDeletedHook;

/// Event pushed to clients as a JSON text frame.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutboundEvent {
    pub event: String,
    pub data: serde_json::Value,
}

impl OutboundEvent {
    pub fn new(event: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }
}

/// Registry of live connections with broadcast and unicast delivery.
#[derive(Clone, Default)]
pub struct Notifier {
    connections: Arc<DashMap<Uuid, mpsc::UnboundedSender<OutboundEvent>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new connection
    pub fn register(&self, id: Uuid, sender: mpsc::UnboundedSender<OutboundEvent>) {
        self.connections.insert(id, sender);
        tracing::info!(connection_id = %id, "realtime connection registered");
    }

    /// Remove a connection
    pub fn unregister(&self, id: &Uuid) {
        self.connections.remove(id);
        tracing::info!(connection_id = %id, "realtime connection removed");
    }

    /// Send an event to every registered connection.
    pub fn broadcast(&self, event: &str, data: serde_json::Value) {
        let message = OutboundEvent::new(event, data);

        let mut dead = Vec::new();
        for entry in self.connections.iter() {
            if entry.value().send(message.clone()).is_err() {
                dead.push(*entry.key());
            }
        }
        for id in dead {
            self.connections.remove(&id);
        }
    }

    /// Send an event to one connection; unknown ids are a silent no-op.
    pub fn emit_to(&self, id: &Uuid, event: &str, data: serde_json::Value) {
        if let Some(sender) = self.connections.get(id) {
            let _ = sender.send(OutboundEvent::new(event, data));
        }
    }

    /// Ids of all currently-registered connections.
    pub fn connection_ids(&self) -> Vec<Uuid> {
        self.connections.iter().map(|entry| *entry.key()).collect()
    }

    /// Number of live connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

/// Deleting a user fans out a fixed test event to every live client.
impl UserDeletedHook for Notifier {
    fn on_user_deleted(&self, id: &str) {
        tracing::debug!(user_id = %id, "broadcasting deletion event");
        self.broadcast(EVENT_TEST, json!({ "message": EVENT_TEST_MESSAGE }));
    }
}
