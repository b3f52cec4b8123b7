//! Move records for in-game history.
//!
//! Records are kept only for the current game (replay, debugging, UI move
//! lists) and discarded on reset.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::side::Side;

/// Landing slots of a single sowing, in order.
///
/// Inline capacity covers any move that does not lap the board.
pub type SowPath = SmallVec<[usize; 16]>;

/// A committed move with its effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,

    /// Source pit.
    pub pit: usize,

    /// Stones picked up from the source pit.
    pub stones: u8,

    /// Slots that received a stone, in sowing order.
    pub path: SowPath,

    /// Whether the last stone landed in the mover's store.
    pub extra_turn: bool,

    /// Stones moved to the mover's store by a capture (0 = none).
    pub captured: u8,

    /// Position of this move in the game (0-based).
    pub sequence: u32,
}

impl MoveRecord {
    /// Slot the last stone landed in.
    #[must_use]
    pub fn last_pit(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// Whether this move captured stones.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured > 0
    }
}
