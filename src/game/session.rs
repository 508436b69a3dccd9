use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumString};
use thiserror::Error;

use crate::shared::ConnectionId;

use super::board::{Board, Coord, Symbol};
use super::win::{check_win, WinningLine};

/// The human always plays X against the computer
pub const COMPUTER_SYMBOL: Symbol = Symbol::O;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameMode {
    #[default]
    TwoPlayer,
    VsComputer,
}

/// Why a move was not applied. These never reach the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("Connection {0} holds no symbol")]
    NoSymbol(ConnectionId),
    #[error("Not {actual}'s turn, waiting on {expected}")]
    OutOfTurn { expected: Symbol, actual: Symbol },
    #[error("Game is over")]
    GameOver,
    #[error("Cell ({row}, {col}) is occupied or off the board")]
    CellUnavailable { row: i64, col: i64 },
    #[error("Computer does not play in two-player mode")]
    NotComputerMode,
    #[error("Session changed since the computer move was scheduled")]
    StaleGeneration,
    #[error("Board is full")]
    BoardFull,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("Both seats are taken")]
    SeatsTaken,
}

/// Result of an accepted move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Won {
        coord: Coord,
        line: WinningLine,
    },
    Continued {
        coord: Coord,
        symbol: Symbol,
        next_turn: Symbol,
    },
}

impl MoveOutcome {
    pub fn coord(&self) -> Coord {
        match self {
            MoveOutcome::Won { coord, .. } | MoveOutcome::Continued { coord, .. } => *coord,
        }
    }

    pub fn symbol(&self) -> Symbol {
        match self {
            MoveOutcome::Won { line, .. } => line.symbol,
            MoveOutcome::Continued { symbol, .. } => *symbol,
        }
    }
}

/// The single authoritative game. Callers serialize access; every method here is synchronous.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current_turn: Symbol,
    active: bool,
    mode: GameMode,
    participants: HashMap<ConnectionId, Symbol>,
    generation: u64,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_turn: Symbol::X,
            active: true,
            mode,
            participants: HashMap::new(),
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Symbol {
        self.current_turn
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Bumped on every reset and replacement
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn participants(&self) -> &HashMap<ConnectionId, Symbol> {
        &self.participants
    }

    pub fn symbol_of(&self, id: ConnectionId) -> Option<Symbol> {
        self.participants.get(&id).copied()
    }

    /// Fresh board, X to move, game active. Seats and mode are kept.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Symbol::X;
        self.active = true;
        self.generation += 1;
    }

    /// Throw the whole session away, seats included, and start over in `mode`
    pub fn replace(&mut self, mode: GameMode) {
        let generation = self.generation + 1;
        *self = Self::new(mode);
        self.generation = generation;
    }

    /// Handle a `game_mode` request: switch modes when needed, then seat the requester
    pub fn request_mode(
        &mut self,
        id: ConnectionId,
        mode: GameMode,
    ) -> Result<Symbol, AssignmentError> {
        if self.mode != mode {
            self.replace(mode);
        }
        self.assign(id)
    }

    fn assign(&mut self, id: ConnectionId) -> Result<Symbol, AssignmentError> {
        let symbol = match self.mode {
            GameMode::VsComputer => Symbol::X,
            GameMode::TwoPlayer => {
                if let Some(existing) = self.symbol_of(id) {
                    return Ok(existing);
                }
                let taken = |symbol: Symbol| self.participants.values().any(|s| *s == symbol);
                if !taken(Symbol::X) {
                    Symbol::X
                } else if !taken(Symbol::O) {
                    Symbol::O
                } else {
                    return Err(AssignmentError::SeatsTaken);
                }
            }
        };
        self.participants.insert(id, symbol);
        Ok(symbol)
    }

    pub fn remove_participant(&mut self, id: ConnectionId) -> Option<Symbol> {
        self.participants.remove(&id)
    }

    /// Apply a human move on behalf of connection `id`
    pub fn apply_move(
        &mut self,
        id: ConnectionId,
        row: i64,
        col: i64,
    ) -> Result<MoveOutcome, MoveRejection> {
        let symbol = self.symbol_of(id).ok_or(MoveRejection::NoSymbol(id))?;
        self.place_stone(symbol, row, col)
    }

    /// Check that a computer move scheduled during `generation` may still be played
    pub fn validate_computer_turn(&self, generation: u64) -> Result<(), MoveRejection> {
        if self.mode != GameMode::VsComputer {
            return Err(MoveRejection::NotComputerMode);
        }
        if self.generation != generation {
            return Err(MoveRejection::StaleGeneration);
        }
        if !self.active {
            return Err(MoveRejection::GameOver);
        }
        if self.current_turn != COMPUTER_SYMBOL {
            return Err(MoveRejection::OutOfTurn {
                expected: self.current_turn,
                actual: COMPUTER_SYMBOL,
            });
        }
        if self.board.is_full() {
            return Err(MoveRejection::BoardFull);
        }
        Ok(())
    }

    /// True when the computer owes a reply to the move just played
    pub fn computer_to_move(&self) -> bool {
        self.mode == GameMode::VsComputer && self.active && self.current_turn == COMPUTER_SYMBOL
    }

    /// Validate and place one stone, then either end the game or pass the turn
    pub fn place_stone(
        &mut self,
        symbol: Symbol,
        row: i64,
        col: i64,
    ) -> Result<MoveOutcome, MoveRejection> {
        if !self.active {
            return Err(MoveRejection::GameOver);
        }
        if symbol != self.current_turn {
            return Err(MoveRejection::OutOfTurn {
                expected: self.current_turn,
                actual: symbol,
            });
        }
        let coord = Board::coord(row, col)
            .filter(|coord| self.board.get(*coord).is_none())
            .ok_or(MoveRejection::CellUnavailable { row, col })?;

        self.board.place(coord, symbol);

        if let Some(line) = check_win(&self.board, coord, symbol) {
            self.active = false;
            return Ok(MoveOutcome::Won { coord, line });
        }

        self.current_turn = symbol.opponent();
        Ok(MoveOutcome::Continued {
            coord,
            symbol,
            next_turn: self.current_turn,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
