//! Move rejection reasons.
//!
//! A rejected move leaves the board untouched. Rejections are ordinary
//! values: a UI typically polls `apply_move` on every click and simply
//! ignores the error.

use thiserror::Error;

use crate::core::Side;

/// Why a move request was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,
    #[error("not {mover}'s turn (waiting on {expected})")]
    NotYourTurn { mover: Side, expected: Side },
    #[error("pit {pit} is not one of {side}'s pits")]
    PitOutOfRange { pit: usize, side: Side },
    #[error("pit {pit} is empty")]
    EmptyPit { pit: usize },
    #[error("another move is in progress")]
    MoveInProgress,
}

impl MoveError {
    /// Stable short name for logs and UI.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveError::GameOver => "game_over",
            MoveError::NotYourTurn { .. } => "not_your_turn",
            MoveError::PitOutOfRange { .. } => "pit_out_of_range",
            MoveError::EmptyPit { .. } => "empty_pit",
            MoveError::MoveInProgress => "move_in_progress",
        }
    }
}
