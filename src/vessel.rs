//! Vessel definitions: a straight run of cells with hit-point tracking.

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A vessel placed (or awaiting placement) on the board. The covered cell
/// coordinates are fixed once placed; repositioning replaces them atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    orientation: Orientation,
    cells: Vec<(usize, usize)>,
    hit_points: usize,
}

impl Vessel {
    /// New unplaced vessel with full hit points and no covered cells.
    pub fn new(length: usize, orientation: Orientation) -> Self {
        Vessel {
            length,
            orientation,
            cells: Vec::new(),
            hit_points: length,
        }
    }

    /// Compute the run of cells covered from `(row, col)`, or `OutOfBoard`
    /// if the extent leaves the grid.
    pub fn span(&self, row: usize, col: usize) -> Result<Vec<(usize, usize)>, BoardError> {
        let fits = match self.orientation {
            Orientation::Horizontal => row < BOARD_SIZE && col + self.length <= BOARD_SIZE,
            Orientation::Vertical => col < BOARD_SIZE && row + self.length <= BOARD_SIZE,
        };
        if !fits {
            return Err(BoardError::OutOfBoard);
        }
        Ok((0..self.length)
            .map(|i| match self.orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect())
    }

    /// Replace the covered cells after a successful placement.
    pub(crate) fn set_position(&mut self, cells: Vec<(usize, usize)>) {
        debug_assert_eq!(cells.len(), self.length);
        self.cells = cells;
    }

    /// Record one hit. Returns `true` when this hit sinks the vessel.
    pub(crate) fn take_hit(&mut self) -> bool {
        if self.hit_points > 0 {
            self.hit_points -= 1;
        }
        self.hit_points == 0
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Covered cell coordinates, in placement order. Empty until placed.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }
}
