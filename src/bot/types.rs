use crate::game::{Board, Coord};

/// Trait for computer-opponent decision making
pub trait BotStrategy: Send + Sync {
    /// Pick the cell to play on the given board
    /// Returns None if no cell is free
    fn decide_move(&self, board: &Board) -> Option<Coord>;

    /// Get the name of this strategy
    fn strategy_name(&self) -> &'static str;
}
