use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

use caro::{
    game::{Board, Coord},
    BotStrategy, ConnectionId, ConnectionManager,
};

// ============================================================================
// Mock Infrastructure
// ============================================================================

#[derive(Clone)]
pub struct MockConnectionManager {
    sent_messages: Arc<RwLock<HashMap<ConnectionId, Vec<String>>>>,
    connected: Arc<RwLock<HashSet<ConnectionId>>>,
    closed: Arc<RwLock<HashSet<ConnectionId>>>,
}

impl MockConnectionManager {
    pub fn new() -> Self {
        Self {
            sent_messages: Arc::new(RwLock::new(HashMap::new())),
            connected: Arc::new(RwLock::new(HashSet::new())),
            closed: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub async fn get_messages_for(&self, id: ConnectionId) -> Vec<String> {
        self.sent_messages
            .read()
            .await
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn clear_messages(&self) {
        self.sent_messages.write().await.clear();
    }

    pub async fn is_connected(&self, id: ConnectionId) -> bool {
        self.connected.read().await.contains(&id)
    }

    pub async fn was_closed(&self, id: ConnectionId) -> bool {
        self.closed.read().await.contains(&id)
    }
}

#[async_trait]
impl ConnectionManager for MockConnectionManager {
    async fn add_connection(&self, id: ConnectionId, _sender: mpsc::UnboundedSender<String>) {
        self.connected.write().await.insert(id);
    }

    async fn remove_connection(&self, id: ConnectionId) {
        self.connected.write().await.remove(&id);
    }

    async fn send_to(&self, id: ConnectionId, message: &str) {
        if !self.is_connected(id).await {
            return;
        }
        self.sent_messages
            .write()
            .await
            .entry(id)
            .or_default()
            .push(message.to_string());
    }

    async fn broadcast(&self, message: &str) {
        let connected: Vec<ConnectionId> = self.connected.read().await.iter().copied().collect();
        for id in connected {
            self.send_to(id, message).await;
        }
    }

    async fn close(&self, id: ConnectionId) {
        self.connected.write().await.remove(&id);
        self.closed.write().await.insert(id);
    }
}

/// Computer opponent that plays the first still-empty cell of a fixed script
pub struct ScriptedBotStrategy {
    moves: Vec<Coord>,
}

impl ScriptedBotStrategy {
    pub fn new(moves: Vec<(usize, usize)>) -> Self {
        Self {
            moves: moves
                .into_iter()
                .map(|(row, col)| Coord::new(row, col))
                .collect(),
        }
    }
}

impl BotStrategy for ScriptedBotStrategy {
    fn decide_move(&self, board: &Board) -> Option<Coord> {
        self.moves
            .iter()
            .copied()
            .find(|coord| board.get(*coord).is_none())
    }

    fn strategy_name(&self) -> &'static str {
        "ScriptedBotStrategy"
    }
}
