//! Move policies.
//!
//! `MovePolicy` is the seam between the game loop and whatever picks a pit:
//! the CPU's `GreedyHeuristic`, or `RandomPolicy` standing in for a human in
//! playouts and tests.

use smallvec::SmallVec;

use crate::core::{Board, GameRng, Side};

/// Chooses a pit for a side.
pub trait MovePolicy: Send + Sync {
    /// Pick one of `side`'s non-empty pits.
    ///
    /// Returns `None` if all of `side`'s pits are empty.
    fn choose_move(&self, board: &Board, side: Side, rng: &mut GameRng) -> Option<usize>;
}

/// Uniform random choice among non-empty pits.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose_move(&self, board: &Board, side: Side, rng: &mut GameRng) -> Option<usize> {
        let legal: SmallVec<[usize; 6]> = board.non_empty_pits(side).collect();
        rng.choose(&legal).copied()
    }
}
