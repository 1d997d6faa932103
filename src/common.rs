//! Common types: board errors and strike outcomes.

/// Result of resolving a strike against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeOutcome {
    /// Strike hit a live vessel segment without sinking it.
    Hit,
    /// Strike hit the last live segment; the whole vessel is now sunk.
    Sunk,
    /// Strike landed on open water.
    Miss,
}

impl StrikeOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, StrikeOutcome::Hit | StrikeOutcome::Sunk)
    }
}

/// Errors returned by board operations. All are recoverable: placement
/// errors trigger a retry, `AlreadyTargeted` is a "try again" to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Placement anchor or extent falls outside the grid.
    OutOfBoard,
    /// Placement overlaps or touches another vessel.
    Collision,
    /// Strike aimed at a cell already Hit, Miss, or Sunk.
    AlreadyTargeted,
    /// Random fleet placement exhausted its attempt budget.
    UnableToPlaceFleet,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBoard => write!(f, "Placement is out of the board"),
            BoardError::Collision => write!(f, "Placement collides with another vessel"),
            BoardError::AlreadyTargeted => write!(f, "Cell was already targeted"),
            BoardError::UnableToPlaceFleet => write!(f, "Unable to place the fleet"),
        }
    }
}

impl std::error::Error for BoardError {}
