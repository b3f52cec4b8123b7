//! The game state machine and its thread-safe wrapper.

pub mod phase;
pub mod shared;
pub mod state;

pub use phase::Phase;
pub use shared::SharedGame;
pub use state::{Game, MoveOutcome};
