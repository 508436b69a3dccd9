use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub const BOARD_SIZE: usize = 15;

/// Stone placed by a player; X always opens a fresh game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opponent(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A cell position. Only `Board::coord` checks it against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `distance` cells along (d_row, d_col), or None when that leaves the board
    pub fn offset(self, d_row: isize, d_col: isize, distance: isize) -> Option<Coord> {
        let row = self.row as isize + d_row * distance;
        let col = self.col as isize + d_col * distance;
        Board::coord(row as i64, col as i64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Convert raw (possibly negative or oversized) wire coordinates into a board position
    pub fn coord(row: i64, col: i64) -> Option<Coord> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// True iff the coordinates are on the board and the cell is unoccupied
    pub fn is_empty(&self, row: i64, col: i64) -> bool {
        Self::coord(row, col).is_some_and(|coord| self.get(coord).is_none())
    }

    /// Occupant of `coord`; None when empty or off the board
    pub fn get(&self, coord: Coord) -> Option<Symbol> {
        self.cells
            .get(coord.row)
            .and_then(|line| line.get(coord.col))
            .copied()
            .flatten()
    }

    /// Overwrites whatever is there; callers check `is_empty` first.
    /// Returns false without writing when `coord` is off the board.
    pub fn place(&mut self, coord: Coord, symbol: Symbol) -> bool {
        match self
            .cells
            .get_mut(coord.row)
            .and_then(|line| line.get_mut(coord.col))
        {
            Some(cell) => {
                *cell = Some(symbol);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.cells = [[None; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_none())
            .count()
    }

    /// Unoccupied cells in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::with_capacity(self.empty_count());
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                if cell.is_none() {
                    cells.push(Coord { row, col });
                }
            }
        }
        cells
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
