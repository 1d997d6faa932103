//! Targeting heuristic for the automated opponent.
//!
//! Two modes with persistent memory across turns: hunting (random targets,
//! plus a near-miss neighbor probe on the hard tier) and targeting (follow
//! up the orthogonal neighbors of the last hit, falling back to the anchor
//! hit of the streak when one direction dead-ends).

use rand::Rng;

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::game::Difficulty;

/// Opponent memory carried between turns.
#[derive(Debug, Clone, Default)]
pub struct AiMemory {
    /// Last strike was a hit and the streak is still being followed.
    pub streak: bool,
    /// Coordinate of the last strike, hit or miss.
    pub last_target: (usize, usize),
    /// First hit of the current streak, kept so the heuristic can resume
    /// probing the other side of the vessel after a dead end.
    pub anchor: Option<(usize, usize)>,
}

impl AiMemory {
    pub fn new() -> Self {
        AiMemory::default()
    }

    /// Record the result of a resolved strike.
    pub fn record(&mut self, target: (usize, usize), was_hit: bool) {
        self.last_target = target;
        if was_hit {
            self.streak = true;
            if self.anchor.is_none() {
                self.anchor = Some(target);
            }
        } else {
            // The anchor survives misses: a later turn may still probe the
            // unexplored side of the streak's first hit.
            self.streak = false;
        }
    }
}

/// Clamp a neighbor coordinate to the nearest in-board edge. A neighbor that
/// clamps onto the probe cell itself is harmless: that cell is never still
/// occupied once struck.
fn normalize(row: isize, col: isize) -> (usize, usize) {
    let max = (BOARD_SIZE - 1) as isize;
    (row.clamp(0, max) as usize, col.clamp(0, max) as usize)
}

/// Probe the four orthogonal neighbors of (`row`, `col`) in a fixed order
/// (up, left, right, down) and return the first still holding a live vessel
/// segment.
pub fn find_ship_around(board: &Board, row: usize, col: usize) -> Option<(usize, usize)> {
    let (row, col) = (row as isize, col as isize);
    let neighbors = [
        normalize(row - 1, col),
        normalize(row, col - 1),
        normalize(row, col + 1),
        normalize(row + 1, col),
    ];
    neighbors.into_iter().find(|&(r, c)| board.find_ship(r, c))
}

/// Uniformly random cell among those not yet targeted, so the turn always
/// terminates. `None` once every cell has been struck.
fn random_untargeted<R: Rng>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let open: Vec<(usize, usize)> = (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
        .filter(|&(r, c)| !board.cell(r, c).is_targeted())
        .collect();
    if open.is_empty() {
        None
    } else {
        Some(open[rng.random_range(0..open.len())])
    }
}

/// Choose the next strike coordinate against `board`.
///
/// Targeting mode (streak live): neighbors of the last hit, then neighbors
/// of the consumed anchor, then a random-anchor probe, then random. Hunting
/// mode: random, except the hard tier first re-probes around the previous
/// target to exploit a near-miss pattern.
pub fn next_target<R: Rng>(
    board: &Board,
    memory: &mut AiMemory,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<(usize, usize)> {
    if memory.streak {
        let (row, col) = memory.last_target;
        if let Some(target) = find_ship_around(board, row, col) {
            return Some(target);
        }
        if let Some(anchor) = memory.anchor.take() {
            // Resume from the streak's first hit; its other side may still
            // hold the rest of the vessel.
            memory.last_target = anchor;
            if let Some(target) = find_ship_around(board, anchor.0, anchor.1) {
                return Some(target);
            }
        }
        let probe_row = rng.random_range(0..BOARD_SIZE);
        let probe_col = rng.random_range(0..BOARD_SIZE);
        if let Some(target) = find_ship_around(board, probe_row, probe_col) {
            return Some(target);
        }
        random_untargeted(board, rng)
    } else {
        if difficulty == Difficulty::Hard {
            let (row, col) = memory.last_target;
            if let Some(target) = find_ship_around(board, row, col) {
                return Some(target);
            }
        }
        random_untargeted(board, rng)
    }
}
