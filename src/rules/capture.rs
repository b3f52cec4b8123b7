//! The capture rule.
//!
//! When the last stone lands in an empty pit on the mover's own side and the
//! facing pit holds stones, both pits are emptied into the mover's store.

use tracing::debug;

use crate::core::{Board, Side};

/// Apply the capture rule for a move whose last stone landed on `last`.
///
/// Returns the stones moved into `mover`'s store, or 0 when no capture fired.
/// Must not be called for a move that ended in the mover's store.
pub fn apply_capture(board: &mut Board, last: usize, mover: Side) -> u8 {
    if !mover.owns_pit(last) || board[last] != 1 {
        return 0;
    }

    let opposite = Board::opposite(last);
    if board[opposite] == 0 {
        return 0;
    }

    let taken = board.take(opposite);
    let captured = taken + board.take(last);
    board.add(mover.store(), captured);
    debug!(%mover, taken, from = opposite, into = last, "capture");

    captured
}
