//! Board state: the cell grid, the fleet on it, placement and strike logic.

use log::debug;
use rand::Rng;

use crate::cell::CellState;
use crate::common::{BoardError, StrikeOutcome};
use crate::config::{BOARD_SIZE, FLEET, MAX_FLEET_RESTARTS, MAX_PLACE_ATTEMPTS};
use crate::vessel::{Orientation, Vessel};

/// One side's board: N×N cell grid, the fleet covering it, and the count of
/// vessels still afloat.
pub struct Board {
    grid: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    fleet: Vec<Vessel>,
    lives: usize,
}

impl Board {
    /// Empty board with no vessels placed.
    pub fn new() -> Self {
        Board {
            grid: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            fleet: Vec::new(),
            lives: 0,
        }
    }

    /// Board with the standard fleet placed at random. Each vessel gets a
    /// random orientation, then random anchors are tried until one sticks;
    /// if a vessel exhausts its attempt budget the whole fleet is re-placed
    /// on a fresh board. There is no backtracking across placed vessels.
    pub fn with_random_fleet<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        for restart in 0..MAX_FLEET_RESTARTS {
            let mut board = Board::new();
            if board.fill_fleet(rng).is_ok() {
                return Ok(board);
            }
            debug!("fleet placement stuck, restarting (attempt {})", restart + 1);
        }
        Err(BoardError::UnableToPlaceFleet)
    }

    fn fill_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for &length in FLEET.iter() {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let mut placed = false;
            for _ in 0..MAX_PLACE_ATTEMPTS {
                let row = rng.random_range(0..BOARD_SIZE);
                let col = rng.random_range(0..BOARD_SIZE);
                match self.place_vessel(length, orientation, row, col) {
                    Ok(_) => {
                        placed = true;
                        break;
                    }
                    Err(BoardError::OutOfBoard) | Err(BoardError::Collision) => continue,
                    Err(e) => return Err(e),
                }
            }
            if !placed {
                return Err(BoardError::UnableToPlaceFleet);
            }
        }
        Ok(())
    }

    /// Place one vessel with its anchor at (`row`, `col`). Fails with
    /// `OutOfBoard` if the extent leaves the grid, or `Collision` if any cell
    /// in the extent's bounding box expanded by one in every direction is
    /// non-empty — the single check that enforces both overlap avoidance and
    /// the one-cell no-touch buffer (diagonals included).
    ///
    /// Returns the new vessel's fleet index.
    pub fn place_vessel(
        &mut self,
        length: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<usize, BoardError> {
        let mut vessel = Vessel::new(length, orientation);
        let cells = vessel.span(row, col)?;

        let (last_row, last_col) = cells[cells.len() - 1];
        let row_lo = row.saturating_sub(1);
        let col_lo = col.saturating_sub(1);
        let row_hi = (last_row + 1).min(BOARD_SIZE - 1);
        let col_hi = (last_col + 1).min(BOARD_SIZE - 1);
        for r in row_lo..=row_hi {
            for c in col_lo..=col_hi {
                if self.grid[r][c] != CellState::Empty {
                    return Err(BoardError::Collision);
                }
            }
        }

        let index = self.fleet.len();
        for &(r, c) in &cells {
            self.grid[r][c] = CellState::Occupied(index);
        }
        vessel.set_position(cells);
        self.fleet.push(vessel);
        self.lives += 1;
        Ok(index)
    }

    /// Resolve a strike at (`row`, `col`).
    ///
    /// Rejects with `AlreadyTargeted` (no mutation) if the cell was struck
    /// before. A hit decrements the covering vessel's hit points; when they
    /// reach zero every cell of the vessel flips to `Sunk` and the live-ship
    /// counter goes down by exactly one.
    pub fn strike(&mut self, row: usize, col: usize) -> Result<StrikeOutcome, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBoard);
        }
        match self.grid[row][col] {
            CellState::Hit | CellState::Miss | CellState::Sunk => Err(BoardError::AlreadyTargeted),
            CellState::Occupied(index) => {
                self.grid[row][col] = CellState::Hit;
                if self.fleet[index].take_hit() {
                    // take_hit reports the sink exactly once; the lives guard
                    // keeps a stray repeat from double-decrementing.
                    let cells = self.fleet[index].cells().to_vec();
                    for (r, c) in cells {
                        self.grid[r][c] = CellState::Sunk;
                    }
                    if self.lives > 0 {
                        self.lives -= 1;
                    }
                    Ok(StrikeOutcome::Sunk)
                } else {
                    Ok(StrikeOutcome::Hit)
                }
            }
            CellState::Empty => {
                self.grid[row][col] = CellState::Miss;
                Ok(StrikeOutcome::Miss)
            }
        }
    }

    /// `true` iff a live (not yet Hit or Sunk) vessel segment covers the
    /// cell. This is the one omniscient query the automated opponent is
    /// deliberately granted; a human-equivalent player only ever sees the
    /// fog-of-war view.
    pub fn find_ship(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE && self.grid[row][col].is_live_ship()
    }

    /// State of a single cell. Out-of-range coordinates read as `Empty`.
    pub fn cell(&self, row: usize, col: usize) -> CellState {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            self.grid[row][col]
        } else {
            CellState::Empty
        }
    }

    /// Vessels in fleet order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.fleet
    }

    /// Vessels still afloat.
    pub fn lives(&self) -> usize {
        self.lives
    }

    /// `true` when every vessel has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.lives == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
