//! The CPU's greedy three-tier move heuristic.
//!
//! Pits are scanned in ascending index order (7 to 12 for the CPU):
//!
//! 1. A pit whose last stone lands in the store wins outright.
//! 2. Otherwise the first pit whose move fires a capture.
//! 3. Otherwise the pit holding the most stones (lowest index on ties).
//!
//! Stones merely passing through the store on a longer sowing do not count
//! as a capture.

use tracing::debug;

use crate::core::{Board, GameRng, Side};

use super::policy::MovePolicy;
use super::simulate::simulate;

/// Pick a pit for `side`, or `None` when all its pits are empty.
///
/// ```
/// use kalah_engine::ai::choose_move;
/// use kalah_engine::core::{Board, Side};
///
/// // Pit 12 holds one stone: it lands in the store.
/// let board = Board::from_slots([4, 4, 4, 4, 4, 4, 0, 4, 4, 3, 4, 4, 1, 0]);
/// assert_eq!(choose_move(&board, Side::Cpu), Some(12));
/// ```
#[must_use]
pub fn choose_move(board: &Board, side: Side) -> Option<usize> {
    let mut first_capture = None;
    let mut most_stones: Option<(usize, u8)> = None;

    for pit in side.pits() {
        let stones = board[pit];
        if stones == 0 {
            debug!(pit, "empty");
            continue;
        }

        let sim = simulate(*board, pit, side);
        if sim.outcome.extra_turn {
            debug!(pit, "chosen: lands in store (extra turn)");
            return Some(pit);
        }

        if sim.outcome.captured > 0 && first_capture.is_none() {
            debug!(pit, captured = sim.outcome.captured, "capture candidate");
            first_capture = Some(pit);
        }

        debug!(pit, stones, last = ?sim.outcome.last_pit(), "considered");
        if most_stones.map_or(true, |(_, best)| stones > best) {
            most_stones = Some((pit, stones));
        }
    }

    let choice = first_capture.or(most_stones.map(|(pit, _)| pit));
    match (choice, first_capture) {
        (Some(pit), Some(_)) => debug!(pit, "chosen: capture"),
        (Some(pit), None) => debug!(pit, "chosen: most stones"),
        (None, _) => debug!(%side, "no legal move"),
    }
    choice
}

/// The CPU's move for `board`.
#[must_use]
pub fn choose_cpu_move(board: &Board) -> Option<usize> {
    choose_move(board, Side::Cpu)
}

/// `MovePolicy` wrapper around the greedy heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyHeuristic;

impl MovePolicy for GreedyHeuristic {
    fn choose_move(&self, board: &Board, side: Side, _rng: &mut GameRng) -> Option<usize> {
        choose_move(board, side)
    }
}
