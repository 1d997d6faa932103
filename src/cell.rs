//! Per-cell board state.

/// State of a single board position. `Occupied` carries the index of the
/// covering vessel in the board's fleet, a non-owning back-reference used by
/// strike resolution. Occupied transitions only to `Hit` or `Sunk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Occupied(usize),
    Hit,
    Miss,
    Sunk,
}

impl CellState {
    /// A cell counts as targeted once a strike has resolved against it.
    pub fn is_targeted(&self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss | CellState::Sunk)
    }

    /// `true` while an unstruck vessel segment covers the cell.
    pub fn is_live_ship(&self) -> bool {
        matches!(self, CellState::Occupied(_))
    }
}
