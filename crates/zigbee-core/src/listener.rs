//! Cluster listeners: the host-side event mechanism clusters report to

use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use zcl_protocol::Value;

/// Event kinds a cluster can emit to its listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Translated device action destined for automation triggers
    ZhaSendEvent,
}

impl EventKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ZhaSendEvent => "zha_send_event",
        }
    }
}

/// An event delivered to cluster listeners
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterEvent {
    pub kind: EventKind,
    /// Cluster that emitted the event
    pub cluster_id: u16,
    /// Event name (e.g. "preset")
    pub name: String,
    /// Command arguments, unchanged
    pub args: Vec<Value>,
}

/// Receiver of cluster events
pub trait ClusterListener: Send + Sync {
    fn cluster_event(&self, event: &ClusterEvent);
}

/// Listener registry owned by a cluster
#[derive(Default)]
pub struct Listeners {
    listeners: DashMap<usize, Arc<dyn ClusterListener>>,
    next_id: AtomicUsize,
}

impl Listeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener, returning an ID usable with [`Listeners::remove_listener`]
    pub fn add_listener(&self, listener: Arc<dyn ClusterListener>) -> usize {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.insert(id, listener);
        id
    }

    pub fn remove_listener(&self, id: usize) -> bool {
        self.listeners.remove(&id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver one event to every registered listener
    pub fn listener_event(&self, kind: EventKind, cluster_id: u16, name: &str, args: &[Value]) {
        let event = ClusterEvent {
            kind,
            cluster_id,
            name: name.to_string(),
            args: args.to_vec(),
        };

        // Snapshot so listeners may (un)register without holding a shard lock
        let listeners: Vec<Arc<dyn ClusterListener>> =
            self.listeners.iter().map(|r| r.value().clone()).collect();
        for listener in listeners {
            listener.cluster_event(&event);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}

/// Forwards cluster events to a broadcast channel
pub struct BroadcastListener {
    event_tx: broadcast::Sender<ClusterEvent>,
}

impl BroadcastListener {
    /// Create a listener with its own channel
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, _) = broadcast::channel(capacity);
        Self { event_tx }
    }

    /// Subscribe to forwarded events
    pub fn subscribe(&self) -> broadcast::Receiver<ClusterEvent> {
        self.event_tx.subscribe()
    }
}

impl ClusterListener for BroadcastListener {
    fn cluster_event(&self, event: &ClusterEvent) {
        // No subscribers is not an error
        let _ = self.event_tx.send(event.clone());
    }
}
