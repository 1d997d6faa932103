mod ai;
mod board;
mod cell;
mod common;
mod config;
mod game;
mod logging;
mod vessel;
mod view;

pub use ai::{find_ship_around, next_target, AiMemory};
pub use board::Board;
pub use cell::CellState;
pub use common::{BoardError, StrikeOutcome};
pub use config::{BOARD_SIZE, FLEET, NUM_VESSELS, TOTAL_FLEET_CELLS};
pub use game::{Difficulty, Game, Side};
pub use logging::init_logging;
pub use vessel::{Orientation, Vessel};
pub use view::{BoardView, Perspective, SYMBOL_BLANK, SYMBOL_HIT, SYMBOL_MISS, SYMBOL_SUNK};
