use super::board::{Board, Coord, Symbol};

pub const WIN_LENGTH: usize = 5;

/// (row, col) deltas, checked in this order; the first qualifying line is reported
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Furthest distance counted on each side of the played stone
const MAX_REACH: isize = WIN_LENGTH as isize - 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub symbol: Symbol,
    /// Contiguous run, ordered from one end to the other, including the played cell
    pub cells: Vec<Coord>,
}

/// Check whether the stone just placed at `origin` completes five in a row
pub fn check_win(board: &Board, origin: Coord, symbol: Symbol) -> Option<WinningLine> {
    for (d_row, d_col) in DIRECTIONS {
        let backward = run_length(board, origin, symbol, -d_row, -d_col);
        let forward = run_length(board, origin, symbol, d_row, d_col);

        if 1 + backward + forward >= WIN_LENGTH {
            let cells = (-(backward as isize)..=forward as isize)
                .filter_map(|distance| origin.offset(d_row, d_col, distance))
                .collect();
            return Some(WinningLine { symbol, cells });
        }
    }
    None
}

fn run_length(board: &Board, origin: Coord, symbol: Symbol, d_row: isize, d_col: isize) -> usize {
    (1..=MAX_REACH)
        .map_while(|distance| origin.offset(d_row, d_col, distance))
        .take_while(|coord| board.get(*coord) == Some(symbol))
        .count()
}
