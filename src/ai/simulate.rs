//! Side-effect-free move simulation.
//!
//! `Board` is `Copy`: the simulation takes the position by value, plays the
//! real sowing/capture pipeline on that scratch copy and hands it back. The
//! live board cannot be reached from here.

use crate::core::{Board, Side};
use crate::rules::{sow, SowOutcome};

/// A move played on a scratch board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatedMove {
    /// The scratch board after the move.
    pub board: Board,
    /// What the move did.
    pub outcome: SowOutcome,
}

impl SimulatedMove {
    /// Store gain for the mover (stones passing through plus captures).
    #[must_use]
    pub fn store_gain(&self, before: &Board, side: Side) -> u8 {
        self.board.store(side) - before.store(side)
    }
}

/// Play `pit` for `side` on a copy of `board`.
#[must_use]
pub fn simulate(board: Board, pit: usize, side: Side) -> SimulatedMove {
    let mut scratch = board;
    let outcome = sow(&mut scratch, pit, side);
    SimulatedMove {
        board: scratch,
        outcome,
    }
}
