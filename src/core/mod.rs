//! Core engine types: board, sides, move records, RNG, configuration.
//!
//! These are the building blocks shared by the rules, the CPU heuristic and
//! the game state machine.

pub mod board;
pub mod side;
pub mod rng;
pub mod config;
pub mod record;

pub use board::{Board, BOARD_SLOTS, CPU_STORE, INITIAL_STONES, PITS_PER_SIDE, PLAYER_STORE, TOTAL_STONES};
pub use side::{Side, SideMap};
pub use rng::GameRng;
pub use config::EngineConfig;
pub use record::{MoveRecord, SowPath};
