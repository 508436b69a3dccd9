use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::game::{Coord, GameMode, Symbol, WinningLine};

/// Client -> Server messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientMessage {
    Reset,
    GameMode(GameMode),
    /// Any record without a recognised `type`; a `player` field is ignored
    Move { row: i64, col: i64 },
}

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("Unknown game mode: {0}")]
    UnknownMode(String),
    #[error("Missing or non-string field: {0}")]
    MissingField(&'static str),
}

/// Coordinates of a move record. Missing or non-integer fields read as 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct MoveRecord {
    row: i64,
    col: i64,
}

impl MoveRecord {
    fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_i64).unwrap_or_default();
        Self {
            row: field("row"),
            col: field("col"),
        }
    }
}

impl From<MoveRecord> for ClientMessage {
    fn from(record: MoveRecord) -> Self {
        ClientMessage::Move {
            row: record.row,
            col: record.col,
        }
    }
}

impl ClientMessage {
    /// Decode one inbound frame. Anything that is not a `reset` or `game_mode`
    /// record, including text that is not JSON at all, becomes a move and is
    /// left to move validation.
    pub fn parse(text: &str) -> Result<Self, MessageError> {
        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "Undecodable message, reading it as a default move");
                return Ok(MoveRecord::default().into());
            }
        };

        match value.get("type").and_then(Value::as_str) {
            Some("reset") => Ok(ClientMessage::Reset),
            Some("game_mode") => {
                let mode = value
                    .get("mode")
                    .and_then(Value::as_str)
                    .ok_or(MessageError::MissingField("mode"))?;
                GameMode::from_str(mode)
                    .map(ClientMessage::GameMode)
                    .map_err(|_| MessageError::UnknownMode(mode.to_string()))
            }
            _ => Ok(MoveRecord::from_value(&value).into()),
        }
    }
}

/// Server -> Client notifications, serialized as flat objects tagged by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    PlayerAssignment {
        player: Symbol,
    },
    TurnUpdate {
        current_player: Symbol,
    },
    Move {
        row: usize,
        col: usize,
        player: Symbol,
        last_move: Coord,
    },
    Win {
        row: usize,
        col: usize,
        player: Symbol,
        winning_cells: Vec<Coord>,
    },
    Reset,
}

/// Helper functions for creating messages
impl ServerMessage {
    pub fn player_assignment(player: Symbol) -> Self {
        ServerMessage::PlayerAssignment { player }
    }

    pub fn turn_update(current_player: Symbol) -> Self {
        ServerMessage::TurnUpdate { current_player }
    }

    pub fn stone_placed(coord: Coord, player: Symbol) -> Self {
        ServerMessage::Move {
            row: coord.row,
            col: coord.col,
            player,
            last_move: coord,
        }
    }

    pub fn win(coord: Coord, line: &WinningLine) -> Self {
        ServerMessage::Win {
            row: coord.row,
            col: coord.col,
            player: line.symbol,
            winning_cells: line.cells.clone(),
        }
    }

    pub fn reset() -> Self {
        ServerMessage::Reset
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
