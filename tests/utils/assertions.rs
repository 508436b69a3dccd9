//! Test assertion helpers - fluent API for verifying test expectations
#![allow(dead_code)] // Test utilities may not all be used in every test

use caro::ServerMessage;

use super::setup::TestSetup;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct MessageAssertion<'a> {
    setup: &'a TestSetup,
    players: Vec<&'a str>,
}

impl<'a> MessageAssertion<'a> {
    /// Create an assertion for all players in the setup
    pub fn for_all_players(setup: &'a TestSetup) -> Self {
        let players = setup.players.iter().map(|(name, _)| name.as_str()).collect();
        Self { setup, players }
    }

    /// Create an assertion for specific players
    pub fn for_players(setup: &'a TestSetup, players: Vec<&'a str>) -> Self {
        Self { setup, players }
    }

    async fn messages_for(&self, player: &str) -> Vec<ServerMessage> {
        self.setup
            .mock_conn_manager
            .get_messages_for(self.setup.id(player))
            .await
            .iter()
            .map(|text| {
                serde_json::from_str(text)
                    .unwrap_or_else(|e| panic!("{} got unparseable message {}: {}", player, text, e))
            })
            .collect()
    }

    /// Assert that every player received exactly this sequence since the last clear
    pub async fn received_exactly(self, expected: Vec<ServerMessage>) {
        for player in &self.players {
            let messages = self.messages_for(player).await;
            assert_eq!(messages, expected, "{} received the wrong messages", player);
        }
    }

    /// Assert that players received no messages
    pub async fn received_no_messages(self) {
        for player in &self.players {
            let messages = self.messages_for(player).await;
            assert!(
                messages.is_empty(),
                "{} should not have received any messages, got {:?}",
                player,
                messages
            );
        }
    }

    /// Return the single message every player received, checking they all got the same one
    pub async fn received_one(self) -> ServerMessage {
        let mut first: Option<ServerMessage> = None;
        for player in &self.players {
            let messages = self.messages_for(player).await;
            assert_eq!(messages.len(), 1, "{} should have one message: {:?}", player, messages);
            match &first {
                Some(seen) => assert_eq!(&messages[0], seen, "{} saw a different message", player),
                None => first = Some(messages[0].clone()),
            }
        }
        first.expect("at least one player to check")
    }

    /// Every player saw the same sequence; return it
    pub async fn received_identical(self) -> Vec<ServerMessage> {
        let mut first: Option<Vec<ServerMessage>> = None;
        for player in &self.players {
            let messages = self.messages_for(player).await;
            match &first {
                Some(seen) => assert_eq!(&messages, seen, "{} saw a different order", player),
                None => first = Some(messages),
            }
        }
        first.unwrap_or_default()
    }
}
