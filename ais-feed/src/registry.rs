use std::{
    collections::HashMap,
    fmt::Display,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use tokio::{io::AsyncWriteExt, net::tcp::OwnedWriteHalf, sync::Mutex};
use tracing::warn;

/// Identifies one admitted client connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The set of currently open client connections.
///
/// The map lock is only held while admitting, removing or snapshotting
/// connections, never across a network write. Each connection carries
/// its own lock, so one stalled peer cannot block registration or
/// deregistration of the others.
pub struct ConnectionRegistry {
    next_id: AtomicU64,
    connections: Mutex<HashMap<ConnectionId, Arc<Mutex<OwnedWriteHalf>>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            connections: Mutex::new(HashMap::new()),
        }
    }

    pub async fn add(&self, writer: OwnedWriteHalf) -> ConnectionId {
        let id = ConnectionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.connections
            .lock()
            .await
            .insert(id, Arc::new(Mutex::new(writer)));
        id
    }

    /// Removing an already removed connection is a no-op, the watcher
    /// and the broadcaster may both observe the same dead peer.
    pub async fn remove(&self, id: ConnectionId) -> bool {
        self.connections.lock().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.connections.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.connections.lock().await.is_empty()
    }

    /// Writes `bytes` to every registered connection, pruning the ones
    /// that fail. A failed write never aborts delivery to the rest.
    /// Returns the number of successful deliveries.
    pub async fn broadcast(&self, bytes: &[u8]) -> usize {
        let targets: Vec<_> = self
            .connections
            .lock()
            .await
            .iter()
            .map(|(id, writer)| (*id, Arc::clone(writer)))
            .collect();

        let mut delivered = 0;
        let mut failed = Vec::new();

        for (id, writer) in targets {
            match writer.lock().await.write_all(bytes).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    warn!(%id, "dropping client after failed write: {e:?}");
                    failed.push(id);
                }
            }
        }

        for id in failed {
            self.remove(id).await;
        }

        delivered
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
