use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

use crate::bot::BotStrategy;
use crate::shared::ConnectionId;
use crate::websockets::{ClientMessage, ConnectionManager, ServerMessage};

use super::session::{GameMode, GameSession, MoveOutcome, COMPUTER_SYMBOL};

pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(500);

/// Owns the one game session and serializes every change to it.
///
/// Each operation holds the session lock from validation through the last
/// notification it sends, so every participant observes notifications in the
/// order the state actually changed. Broadcasting only pushes onto unbounded
/// per-connection queues, so the lock is never held across network I/O.
#[derive(Clone)]
pub struct GameCoordinator {
    session: Arc<Mutex<GameSession>>,
    connection_manager: Arc<dyn ConnectionManager>,
    strategy: Arc<dyn BotStrategy>,
    computer_delay: Duration,
}

impl GameCoordinator {
    pub fn new(
        connection_manager: Arc<dyn ConnectionManager>,
        strategy: Arc<dyn BotStrategy>,
        computer_delay: Duration,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(GameSession::default())),
            connection_manager,
            strategy,
            computer_delay,
        }
    }

    /// Copy of the current session, for inspection only
    pub async fn snapshot(&self) -> GameSession {
        self.session.lock().await.clone()
    }

    /// Register a freshly upgraded connection. It holds no symbol until it picks a mode.
    #[instrument(skip(self, sender))]
    pub async fn connect(&self, id: ConnectionId, sender: mpsc::UnboundedSender<String>) {
        let _session = self.session.lock().await;
        self.connection_manager.add_connection(id, sender).await;
        info!(connection_id = %id, "Participant connected");
    }

    #[instrument(skip(self))]
    pub async fn disconnect(&self, id: ConnectionId) {
        let mut session = self.session.lock().await;
        self.connection_manager.remove_connection(id).await;
        let released = session.remove_participant(id);
        info!(
            connection_id = %id,
            released_symbol = ?released,
            "Participant disconnected"
        );
    }

    /// Route one decoded inbound message
    pub async fn handle_message(&self, id: ConnectionId, message: ClientMessage) {
        match message {
            ClientMessage::Reset => self.reset().await,
            ClientMessage::GameMode(mode) => self.request_mode(id, mode).await,
            ClientMessage::Move { row, col } => self.play_move(id, row, col).await,
        }
    }

    #[instrument(skip(self))]
    pub async fn request_mode(&self, id: ConnectionId, mode: GameMode) {
        let mut session = self.session.lock().await;

        if session.mode() != mode {
            info!(from = %session.mode(), to = %mode, "Switching game mode, starting a new session");
        }

        match session.request_mode(id, mode) {
            Ok(symbol) => {
                info!(connection_id = %id, symbol = %symbol, mode = %mode, "Assigned symbol");
                self.send_to(id, ServerMessage::player_assignment(symbol))
                    .await;
                self.send_to(id, ServerMessage::turn_update(session.current_turn()))
                    .await;
            }
            Err(e) => {
                warn!(connection_id = %id, error = %e, "Rejecting participant, closing connection");
                self.connection_manager.close(id).await;
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn play_move(&self, id: ConnectionId, row: i64, col: i64) {
        let mut session = self.session.lock().await;

        let outcome = match session.apply_move(id, row, col) {
            Ok(outcome) => outcome,
            Err(reason) => {
                debug!(connection_id = %id, reason = %reason, "Ignoring move");
                return;
            }
        };

        self.announce(&session, &outcome).await;

        if session.computer_to_move() {
            self.schedule_computer_move(session.generation());
        }
    }

    #[instrument(skip(self))]
    pub async fn reset(&self) {
        let mut session = self.session.lock().await;
        session.reset();
        info!(generation = session.generation(), "Game reset");

        self.broadcast(ServerMessage::reset()).await;
        self.broadcast(ServerMessage::turn_update(session.current_turn()))
            .await;
    }

    /// Run the computer's reply after the configured delay, without holding the lock while waiting
    fn schedule_computer_move(&self, generation: u64) {
        debug!(
            generation,
            delay_ms = self.computer_delay.as_millis() as u64,
            "Scheduling computer move"
        );
        let coordinator = self.clone();
        tokio::spawn(async move {
            sleep(coordinator.computer_delay).await;
            coordinator.play_computer_move(generation).await;
        });
    }

    #[instrument(skip(self))]
    async fn play_computer_move(&self, generation: u64) {
        let mut session = self.session.lock().await;

        // The session may have been reset, replaced or finished during the delay
        if let Err(reason) = session.validate_computer_turn(generation) {
            debug!(reason = %reason, "Skipping stale computer move");
            return;
        }

        let Some(coord) = self.strategy.decide_move(session.board()) else {
            debug!(strategy = self.strategy.strategy_name(), "Computer found no move");
            return;
        };

        match session.place_stone(COMPUTER_SYMBOL, coord.row as i64, coord.col as i64) {
            Ok(outcome) => self.announce(&session, &outcome).await,
            Err(reason) => {
                warn!(
                    strategy = self.strategy.strategy_name(),
                    reason = %reason,
                    "Computer chose an illegal move"
                );
            }
        }
    }

    /// Broadcast the notifications for an accepted move. Caller still holds the lock.
    async fn announce(&self, session: &GameSession, outcome: &MoveOutcome) {
        info!(
            row = outcome.coord().row,
            col = outcome.coord().col,
            symbol = %outcome.symbol(),
            "Move applied"
        );

        match outcome {
            MoveOutcome::Won { coord, line } => {
                info!(winner = %line.symbol, cells = line.cells.len(), "Game won");
                self.broadcast(ServerMessage::win(*coord, line)).await;
            }
            MoveOutcome::Continued {
                coord,
                symbol,
                next_turn,
            } => {
                self.broadcast(ServerMessage::stone_placed(*coord, *symbol))
                    .await;
                self.broadcast(ServerMessage::turn_update(*next_turn)).await;

                if session.board().is_full() {
                    info!("Board is full with no winner");
                }
            }
        }
    }

    async fn broadcast(&self, message: ServerMessage) {
        match message.to_json() {
            Ok(json) => self.connection_manager.broadcast(&json).await,
            Err(e) => error!(error = %e, "Failed to serialize broadcast message"),
        }
    }

    async fn send_to(&self, id: ConnectionId, message: ServerMessage) {
        match message.to_json() {
            Ok(json) => self.connection_manager.send_to(id, &json).await,
            Err(e) => error!(connection_id = %id, error = %e, "Failed to serialize message"),
        }
    }
}
