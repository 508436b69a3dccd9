use serde_json::json;
use tokio::time::sleep;

use caro::MessageHandler;

use super::setup::{TestSetup, TEST_COMPUTER_DELAY};

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Deliver raw text as if it arrived on the player's socket
    pub async fn send_raw(&self, player: &str, text: &str) {
        self.input_handler
            .handle_message(self.id(player), text.to_string())
            .await;
    }

    pub async fn send_json(&self, player: &str, value: serde_json::Value) {
        self.send_raw(player, &value.to_string()).await;
    }

    /// Clear all recorded messages
    pub async fn clear_messages(&self) {
        self.mock_conn_manager.clear_messages().await;
    }

    /// Give a scheduled computer move time to run
    pub async fn wait_for_computer(&self) {
        sleep(TEST_COMPUTER_DELAY * 4).await;
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    pub async fn send_game_mode(&self, player: &str, mode: &str) {
        self.send_json(player, json!({ "type": "game_mode", "mode": mode }))
            .await;
    }

    pub async fn send_move(&self, player: &str, row: i64, col: i64) {
        self.send_json(player, json!({ "row": row, "col": col })).await;
    }

    pub async fn send_reset(&self, player: &str) {
        self.send_json(player, json!({ "type": "reset" })).await;
    }

    pub async fn disconnect(&self, player: &str) {
        self.coordinator.disconnect(self.id(player)).await;
    }

    /// Seat the named players in two-player mode, in order, and forget the setup chatter
    pub async fn seat_two_players(&self, x: &str, o: &str) {
        self.send_game_mode(x, "two_player").await;
        self.send_game_mode(o, "two_player").await;
        self.clear_messages().await;
    }
}
