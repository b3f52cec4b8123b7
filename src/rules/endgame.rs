//! End-of-game detection, final sweep and result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Side, SideMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The side with the strictly larger store.
    Winner(Side),
    /// Equal stores.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }

    /// The winning side, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::Winner(side) => Some(*side),
            GameResult::Draw => None,
        }
    }
}

/// Whether play has ended: either side's six pits are all empty.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    Side::BOTH.into_iter().any(|side| board.is_side_empty(side))
}

/// Sweep each side's remaining pit stones into that side's store.
///
/// Returns how many stones each side collected. Sweeping an already empty
/// side adds nothing, so calling this twice is harmless.
pub fn finalize(board: &mut Board) -> SideMap<u8> {
    let mut swept = SideMap::with_value(0u8);

    for side in Side::BOTH {
        for pit in side.pits() {
            swept[side] += board.take(pit);
        }
        board.add(side.store(), swept[side]);
    }

    debug!(
        player = swept[Side::Player],
        cpu = swept[Side::Cpu],
        "final collection"
    );
    swept
}

/// Compare stores.
///
/// Meaningful once the board has been finalized.
#[must_use]
pub fn outcome(board: &Board) -> GameResult {
    let player = board.store(Side::Player);
    let cpu = board.store(Side::Cpu);

    match player.cmp(&cpu) {
        std::cmp::Ordering::Greater => GameResult::Winner(Side::Player),
        std::cmp::Ordering::Less => GameResult::Winner(Side::Cpu),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}
