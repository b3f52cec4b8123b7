//! Kalah rules: sowing, capture, end of game.
//!
//! Every move runs the same fixed pipeline on one mutable board:
//!
//! 1. `sow` distributes the source pit's stones
//! 2. `apply_capture` fires when the last stone made an own pit non-empty
//! 3. the turn passes unless the move earned an extra turn
//! 4. `is_terminal` / `finalize` close the game
//!
//! All functions here are free functions over `Board` so the CPU heuristic
//! can run the exact same code on a scratch copy.

pub mod capture;
pub mod endgame;
pub mod error;
pub mod sowing;

pub use capture::apply_capture;
pub use endgame::{finalize, is_terminal, outcome, GameResult};
pub use error::MoveError;
pub use sowing::{distribute, sow, sow_path, SowOutcome};
