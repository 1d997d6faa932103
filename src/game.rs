//! Match orchestration: two boards, strike routing, the automated turn.

use log::debug;
use rand::Rng;

use crate::ai::{self, AiMemory};
use crate::board::Board;
use crate::common::{BoardError, StrikeOutcome};
use crate::view::{BoardView, Perspective};

/// Heuristic tier of the automated opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Normal,
    /// Additionally probes around the previous target while hunting.
    Hard,
}

/// The two sides of a match. `Human` owns the board attacked by the
/// automated opponent; `Automated` owns the board attacked by the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Automated,
}

/// One match: a board per side, the difficulty tier, and the automated
/// opponent's memory. Created once per game and driven strike by strike
/// until either side's fleet is gone.
pub struct Game {
    boards: [Board; 2],
    difficulty: Difficulty,
    memory: AiMemory,
}

impl Game {
    /// New match with both fleets placed at random.
    pub fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Result<Self, BoardError> {
        let human = Board::with_random_fleet(rng)?;
        let automated = Board::with_random_fleet(rng)?;
        Ok(Game::from_boards(human, automated, difficulty))
    }

    /// Match over pre-built boards. Used by tests and scripted setups that
    /// need deterministic placements.
    pub fn from_boards(human: Board, automated: Board, difficulty: Difficulty) -> Self {
        Game {
            boards: [human, automated],
            difficulty,
            memory: AiMemory::new(),
        }
    }

    fn board_index(side: Side) -> usize {
        match side {
            Side::Human => 0,
            Side::Automated => 1,
        }
    }

    /// The given side's board.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[Self::board_index(side)]
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Human strike against the automated side's board. Range and
    /// already-targeted checks are re-applied here regardless of what the
    /// shell validated. Returns whether the strike hit.
    pub fn human_strike(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        let outcome = self.boards[Self::board_index(Side::Automated)].strike(row, col)?;
        debug!("human strike at ({}, {}): {:?}", row, col, outcome);
        Ok(outcome.is_hit())
    }

    /// Run one full automated strike: pick a target with the heuristic,
    /// resolve it against the human board, update the opponent memory.
    ///
    /// An `AlreadyTargeted` rejection is absorbed: the streak flag is
    /// cleared and target selection reruns. Termination is guaranteed
    /// because the random fallback draws only from untargeted cells; `None`
    /// is returned only on a fully exhausted board.
    pub fn automated_turn<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Option<((usize, usize), StrikeOutcome)> {
        loop {
            let board = &self.boards[Self::board_index(Side::Human)];
            let (row, col) = ai::next_target(board, &mut self.memory, self.difficulty, rng)?;
            match self.boards[Self::board_index(Side::Human)].strike(row, col) {
                Ok(outcome) => {
                    debug!("automated strike at ({}, {}): {:?}", row, col, outcome);
                    self.memory.record((row, col), outcome.is_hit());
                    return Some(((row, col), outcome));
                }
                Err(BoardError::AlreadyTargeted) => {
                    self.memory.streak = false;
                    continue;
                }
                // next_target never leaves the grid; nothing else to handle.
                Err(_) => return None,
            }
        }
    }

    /// `true` once the given side has no vessels afloat, i.e. the attacker
    /// of that side has won. The match ends the turn this first holds.
    pub fn check_win(&self, side: Side) -> bool {
        self.board(side).all_sunk()
    }

    /// Read-only snapshot of a side's board for rendering. The fog-of-war
    /// rule is applied here: an `Opponent` perspective never reveals
    /// still-occupied cells.
    pub fn view(&self, side: Side, perspective: Perspective) -> BoardView {
        BoardView::new(self.board(side), perspective)
    }
}
