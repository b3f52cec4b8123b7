//! # kalah-engine
//!
//! Rules engine and greedy CPU opponent for single-player Kalah (Mancala):
//! six pits a side, four stones per pit, one human against the computer.
//!
//! ## Design Principles
//!
//! 1. **One Board, One Writer**: The live board is a `[u8; 14]` owned by
//!    `Game`. Every mutation goes through `apply_move` or `finalize`.
//!
//! 2. **Same Rules for Lookahead**: The CPU evaluates moves by running the
//!    real sowing and capture code on a copy of the board. There is no
//!    second implementation of the rules to drift out of sync.
//!
//! 3. **Host-Driven**: The engine never sleeps, renders or schedules.
//!    Hosts poll `phase()` and pace the CPU with `EngineConfig` timings.
//!
//! ## Board Layout
//!
//! ```text
//!        12  11  10   9   8   7        <- CPU pits
//!   13                           6     <- stores (CPU left, player right)
//!         0   1   2   3   4   5        <- player pits
//! ```
//!
//! Stones travel in ascending index order, wrapping 13 -> 0, and skip the
//! opponent's store. Pit `p` faces pit `12 - p`.
//!
//! ## Modules
//!
//! - `core`: Board, sides, move records, RNG, configuration
//! - `rules`: Sowing, capture, end-of-game sweep, move errors
//! - `ai`: Move simulation, greedy CPU heuristic, playouts
//! - `game`: Phase state machine and the shared-access wrapper

pub mod core;
pub mod rules;
pub mod ai;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, Side, SideMap,
    GameRng, EngineConfig,
    MoveRecord, SowPath,
};

pub use crate::rules::{GameResult, MoveError, SowOutcome};

pub use crate::ai::{
    choose_cpu_move, choose_move, play_out, simulate,
    GreedyHeuristic, MovePolicy, RandomPolicy,
    PlayoutSummary, SimulatedMove,
};

pub use crate::game::{Game, MoveOutcome, Phase, SharedGame};
