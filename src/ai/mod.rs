//! CPU move selection.
//!
//! ## Overview
//!
//! - **Simulation**: `simulate` runs the real rules on a scratch board copy
//! - **Greedy heuristic**: extra turn first, then capture, then biggest pile
//! - **Policies**: `MovePolicy` abstracts "who picks the pit" so playouts can
//!   mix the heuristic with random play
//!
//! ## Usage
//!
//! ```rust
//! use kalah_engine::ai::choose_cpu_move;
//! use kalah_engine::core::Board;
//!
//! // On the opening board pit 9 ends exactly in the CPU store.
//! assert_eq!(choose_cpu_move(&Board::new()), Some(9));
//! ```

pub mod heuristic;
pub mod playout;
pub mod policy;
pub mod simulate;

pub use heuristic::{choose_cpu_move, choose_move, GreedyHeuristic};
pub use playout::{play_out, PlayoutSummary};
pub use policy::{MovePolicy, RandomPolicy};
pub use simulate::{simulate, SimulatedMove};
