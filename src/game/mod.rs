// Public API
pub use board::{Board, Coord, Symbol, BOARD_SIZE};
pub use coordinator::{GameCoordinator, DEFAULT_COMPUTER_DELAY};
pub use session::{
    AssignmentError, GameMode, GameSession, MoveOutcome, MoveRejection, COMPUTER_SYMBOL,
};
pub use win::{check_win, WinningLine, WIN_LENGTH};

// Internal modules
mod board;
mod coordinator;
mod session;
mod win;
