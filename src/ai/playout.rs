//! Full-game playouts between two move policies.
//!
//! Used for soak tests and for pitting the greedy heuristic against random
//! play. The loop drives a `Game` through its public move API, so every
//! rule check and invariant assertion applies.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, GameRng, Side, SideMap};
use crate::game::Game;
use crate::rules::{GameResult, MoveError};

use super::policy::MovePolicy;

/// How a playout ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutSummary {
    /// Final result, or `None` if `max_moves` ran out first.
    pub result: Option<GameResult>,
    /// Moves played by this playout.
    pub moves: u32,
    /// Board after the last move (after the sweep, if finished).
    pub board: Board,
}

impl PlayoutSummary {
    /// Whether the game reached a result.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.result.is_some()
    }
}

/// Play `game` to completion, or until `max_moves` moves (0 = no limit).
///
/// Each side draws from its own fork of `rng`, so swapping one policy does
/// not shift the other's random stream.
pub fn play_out(
    game: &mut Game,
    policies: SideMap<&dyn MovePolicy>,
    rng: &mut GameRng,
    max_moves: u32,
) -> Result<PlayoutSummary, MoveError> {
    let mut rngs = SideMap::new(|_| rng.fork());
    let mut moves = 0;

    loop {
        let Some(side) = game.current_side() else {
            break;
        };

        if game.is_terminal() {
            game.finalize();
            break;
        }

        if max_moves > 0 && moves >= max_moves {
            debug!(moves, "playout stopped at move limit");
            break;
        }

        let Some(pit) = policies[side].choose_move(game.board(), side, &mut rngs[side]) else {
            game.finalize();
            break;
        };

        game.play_move(pit, side)?;
        moves += 1;
    }

    Ok(PlayoutSummary {
        result: game.result(),
        moves,
        board: game.snapshot(),
    })
}
