use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::debug;

use crate::shared::ConnectionId;

/// Outbound side of every live connection. Delivery is best-effort and never blocks.
#[async_trait]
pub trait ConnectionManager: Send + Sync {
    async fn add_connection(&self, id: ConnectionId, sender: mpsc::UnboundedSender<String>);

    async fn remove_connection(&self, id: ConnectionId);

    async fn send_to(&self, id: ConnectionId, message: &str);

    async fn broadcast(&self, message: &str);

    /// Drop the outbound queue so the connection task closes the socket
    async fn close(&self, id: ConnectionId);
}

pub struct InMemoryConnectionManager {
    // connection id -> sender
    connections: Arc<RwLock<HashMap<ConnectionId, mpsc::UnboundedSender<String>>>>,
}

impl InMemoryConnectionManager {
    pub fn new() -> Self {
        Self {
            connections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    #[cfg(test)]
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }
}

impl Default for InMemoryConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionManager for InMemoryConnectionManager {
    async fn add_connection(&self, id: ConnectionId, sender: mpsc::UnboundedSender<String>) {
        let mut connections = self.connections.write().await;
        connections.insert(id, sender);
    }

    async fn remove_connection(&self, id: ConnectionId) {
        let mut connections = self.connections.write().await;
        connections.remove(&id);
    }

    async fn send_to(&self, id: ConnectionId, message: &str) {
        let connections = self.connections.read().await;
        if let Some(sender) = connections.get(&id) {
            if sender.send(message.to_string()).is_err() {
                debug!(connection_id = %id, "Dropped message for closing connection");
            }
        }
    }

    async fn broadcast(&self, message: &str) {
        let connections = self.connections.read().await;
        for sender in connections.values() {
            let _ = sender.send(message.to_string());
        }
    }

    async fn close(&self, id: ConnectionId) {
        let mut connections = self.connections.write().await;
        if connections.remove(&id).is_some() {
            debug!(connection_id = %id, "Closing connection");
        }
    }
}
