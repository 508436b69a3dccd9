use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use caro::{
    BotStrategy, ConnectionId, GameCoordinator, RandomBotStrategy, WebsocketReceiveHandler,
};

use super::mocks::MockConnectionManager;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub const TEST_COMPUTER_DELAY: Duration = Duration::from_millis(30);

pub struct TestSetup {
    pub coordinator: GameCoordinator,
    pub mock_conn_manager: Arc<MockConnectionManager>,
    pub input_handler: Arc<WebsocketReceiveHandler>,
    pub players: Vec<(String, ConnectionId)>,
}

impl TestSetup {
    pub fn id(&self, name: &str) -> ConnectionId {
        self.players
            .iter()
            .find(|(player, _)| player == name)
            .map(|(_, id)| *id)
            .unwrap_or_else(|| panic!("no player named {}", name))
    }
}

pub struct TestSetupBuilder {
    players: Vec<String>,
    strategy: Arc<dyn BotStrategy>,
    computer_delay: Duration,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            players: vec![],
            strategy: Arc::new(RandomBotStrategy::new()),
            computer_delay: TEST_COMPUTER_DELAY,
        }
    }

    pub fn with_players(mut self, players: Vec<&str>) -> Self {
        self.players = players.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_two_players(self) -> Self {
        self.with_players(vec!["alice", "bob"])
    }

    pub fn with_three_players(self) -> Self {
        self.with_players(vec!["alice", "bob", "carol"])
    }

    pub fn with_strategy(mut self, strategy: Arc<dyn BotStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay = delay;
        self
    }

    pub async fn build(self) -> TestSetup {
        let mock_conn_manager = Arc::new(MockConnectionManager::new());
        let coordinator = GameCoordinator::new(
            mock_conn_manager.clone(),
            self.strategy,
            self.computer_delay,
        );

        // Connect players
        let mut players = Vec::new();
        for name in self.players {
            let id = ConnectionId::new();
            let (sender, _receiver) = mpsc::unbounded_channel();
            coordinator.connect(id, sender).await;
            players.push((name, id));
        }

        let input_handler = Arc::new(WebsocketReceiveHandler::new(coordinator.clone()));

        TestSetup {
            coordinator,
            mock_conn_manager,
            input_handler,
            players,
        }
    }
}
