//! Sowing: distributing a pit's stones around the ring.
//!
//! Stones are dropped one per slot, walking indices upward and wrapping at
//! 14. The mover's own store receives stones; the opponent's store is
//! stepped over without consuming one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Side, SowPath};

use super::capture::apply_capture;

/// What a single move did to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SowOutcome {
    /// Stones picked up from the source pit.
    pub stones: u8,

    /// Slots that received a stone, in order.
    pub path: SowPath,

    /// The last stone landed in the mover's store.
    pub extra_turn: bool,

    /// Stones moved into the mover's store by a capture (0 = none).
    pub captured: u8,
}

impl SowOutcome {
    /// Slot of the last stone, or `None` if the pit was empty.
    #[must_use]
    pub fn last_pit(&self) -> Option<usize> {
        self.path.last().copied()
    }
}

/// Play `pit` for `mover`: distribute its stones, then apply the capture
/// rule when the move did not earn an extra turn.
///
/// The caller guarantees `pit` is one of `mover`'s pits and non-empty;
/// `Game::apply_move` performs that validation.
///
/// ```
/// use kalah_engine::core::{Board, Side};
/// use kalah_engine::rules::sow;
///
/// let mut board = Board::from_slots([6, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
/// let outcome = sow(&mut board, 0, Side::Player);
///
/// assert!(outcome.extra_turn);
/// assert_eq!(board.slots(), &[0, 5, 5, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
/// ```
pub fn sow(board: &mut Board, pit: usize, mover: Side) -> SowOutcome {
    let stones = board[pit];
    let path = distribute(board, pit, mover);
    debug!(%mover, pit, stones, ?path, "stone distribution path");

    let extra_turn = path.last() == Some(&mover.store());
    let captured = match path.last() {
        Some(&last) if !extra_turn => apply_capture(board, last, mover),
        _ => 0,
    };

    if extra_turn {
        debug!(%mover, "extra turn: last stone in store");
    }

    SowOutcome {
        stones,
        path,
        extra_turn,
        captured,
    }
}

/// Empty `pit` and drop its stones one by one along the ring.
///
/// Returns the landing slots. Applies no capture.
pub fn distribute(board: &mut Board, pit: usize, mover: Side) -> SowPath {
    let stones = board.take(pit);
    let mut path = SowPath::new();
    let mut slot = pit;

    for _ in 0..stones {
        slot = Board::next_slot(slot, mover);
        board.add(slot, 1);
        path.push(slot);
    }

    path
}

/// Landing slots for playing `pit`, without touching the board.
///
/// ```
/// use kalah_engine::core::{Board, Side};
/// use kalah_engine::rules::sow_path;
///
/// let board = Board::from_slots([4, 4, 4, 4, 4, 8, 0, 4, 4, 4, 4, 4, 4, 0]);
/// let path = sow_path(&board, 5, Side::Player);
/// assert_eq!(path.as_slice(), &[6, 7, 8, 9, 10, 11, 12, 0]);
/// ```
#[must_use]
pub fn sow_path(board: &Board, pit: usize, mover: Side) -> SowPath {
    let mut path = SowPath::new();
    let mut slot = pit;

    for _ in 0..board[pit] {
        slot = Board::next_slot(slot, mover);
        path.push(slot);
    }

    path
}
