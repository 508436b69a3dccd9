use rand::seq::IndexedRandom;
use tracing::debug;

use crate::game::{Board, Coord};

use super::types::BotStrategy;

/// Plays a uniformly random empty cell
pub struct RandomBotStrategy;

impl RandomBotStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomBotStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl BotStrategy for RandomBotStrategy {
    fn decide_move(&self, board: &Board) -> Option<Coord> {
        let candidates = board.empty_cells();
        let choice = candidates.choose(&mut rand::rng()).copied();
        debug!(
            candidates = candidates.len(),
            choice = ?choice,
            "Random strategy picked a cell"
        );
        choice
    }

    fn strategy_name(&self) -> &'static str {
        "RandomBotStrategy"
    }
}
