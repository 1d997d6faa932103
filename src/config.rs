//! Fixed game parameters: board size, fleet composition, placement bounds.

pub const BOARD_SIZE: usize = 10;

/// Vessel lengths each side must place, largest first so the tightest
/// placements happen on the emptiest board.
pub const FLEET: [usize; NUM_VESSELS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];
pub const NUM_VESSELS: usize = 10;
pub const TOTAL_FLEET_CELLS: usize = 20;

/// Random anchor attempts per vessel before the whole fleet is re-placed.
pub const MAX_PLACE_ATTEMPTS: usize = 1000;
/// Whole-fleet restarts before placement gives up entirely.
pub const MAX_FLEET_RESTARTS: usize = 32;
