//! Read-only board snapshots with the fog-of-war rule applied.

use crate::board::Board;
use crate::cell::CellState;
use crate::config::BOARD_SIZE;

/// Whose eyes the snapshot is taken through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// The board's owner: occupied cells show as the vessel-length digit.
    Owner,
    /// The attacking side: still-occupied cells render blank. Hit, Miss and
    /// Sunk cells always render truthfully.
    Opponent,
}

pub const SYMBOL_HIT: char = '*';
pub const SYMBOL_MISS: char = '.';
pub const SYMBOL_SUNK: char = 'X';
pub const SYMBOL_BLANK: char = ' ';

/// Caller-facing symbol grid for one board. Visibility is decided here, in
/// the core, so no renderer can leak hidden occupancy.
pub struct BoardView {
    symbols: [[char; BOARD_SIZE]; BOARD_SIZE],
    lives: usize,
}

impl BoardView {
    pub(crate) fn new(board: &Board, perspective: Perspective) -> Self {
        let mut symbols = [[SYMBOL_BLANK; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in symbols.iter_mut().enumerate() {
            for (col, symbol) in line.iter_mut().enumerate() {
                *symbol = match board.cell(row, col) {
                    CellState::Empty => SYMBOL_BLANK,
                    CellState::Hit => SYMBOL_HIT,
                    CellState::Miss => SYMBOL_MISS,
                    CellState::Sunk => SYMBOL_SUNK,
                    CellState::Occupied(index) => match perspective {
                        Perspective::Owner => {
                            char::from_digit(board.vessels()[index].length() as u32, 10)
                                .unwrap_or(SYMBOL_BLANK)
                        }
                        Perspective::Opponent => SYMBOL_BLANK,
                    },
                };
            }
        }
        BoardView {
            symbols,
            lives: board.lives(),
        }
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Symbol at (`row`, `col`).
    pub fn symbol(&self, row: usize, col: usize) -> char {
        self.symbols[row][col]
    }

    /// One row of symbols, for line-by-line rendering.
    pub fn row(&self, row: usize) -> &[char] {
        &self.symbols[row]
    }

    /// Vessels still afloat on the viewed board.
    pub fn lives(&self) -> usize {
        self.lives
    }
}
