//! Serialized access to a game from several threads.
//!
//! A host that runs the CPU on a timer or a worker thread wraps its `Game`
//! in a `SharedGame`. Every mutation goes through one mutex, so no move ever
//! observes a half-applied board.
//!
//! A CPU turn is split in two so the host can present a thinking pause
//! between decision and execution:
//!
//! 1. `begin_cpu_turn` picks the pit and marks a move as in flight
//! 2. `commit_cpu_turn` applies it
//!
//! While a move is in flight every other move request is rejected with
//! `MoveError::MoveInProgress`.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::core::{Board, Side, SideMap};
use crate::rules::MoveError;

use super::phase::Phase;
use super::state::{Game, MoveOutcome};

#[derive(Debug)]
struct Inner {
    game: Game,
    pending_cpu: Option<usize>,
}

/// A `Game` behind a mutex, cloneable across threads.
#[derive(Clone, Debug)]
pub struct SharedGame {
    inner: Arc<Mutex<Inner>>,
}

impl SharedGame {
    /// Wrap a game.
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                game,
                pending_cpu: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic mid-move is an invariant violation; the board it left
        // behind is still the best view we have.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.lock().game.snapshot()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lock().game.phase()
    }

    /// Whether a CPU move has been chosen but not yet committed.
    #[must_use]
    pub fn cpu_move_pending(&self) -> bool {
        self.lock().pending_cpu.is_some()
    }

    /// Run `f` against the game without mutating it.
    pub fn with_game<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&self.lock().game)
    }

    /// Play a full move for `mover`, finalizing if the board goes terminal.
    pub fn play_move(&self, pit: usize, mover: Side) -> Result<MoveOutcome, MoveError> {
        let mut inner = self.lock();
        if inner.pending_cpu.is_some() {
            return Err(MoveError::MoveInProgress);
        }
        inner.game.play_move(pit, mover)
    }

    /// Choose the CPU's pit and mark it in flight.
    ///
    /// Returns `Ok(None)` when the CPU has no move; the game is finalized.
    pub fn begin_cpu_turn(&self) -> Result<Option<usize>, MoveError> {
        let mut inner = self.lock();
        if inner.pending_cpu.is_some() {
            return Err(MoveError::MoveInProgress);
        }

        match inner.game.phase() {
            Phase::GameOver => return Err(MoveError::GameOver),
            Phase::AwaitingPlayer => {
                return Err(MoveError::NotYourTurn {
                    mover: Side::Cpu,
                    expected: Side::Player,
                })
            }
            Phase::AwaitingCpu => {}
        }

        let choice = if inner.game.is_terminal() {
            None
        } else {
            inner.game.choose_cpu_move()
        };

        match choice {
            Some(pit) => {
                debug!(pit, "CPU move pending");
                inner.pending_cpu = Some(pit);
            }
            None => {
                inner.game.finalize();
            }
        }
        Ok(choice)
    }

    /// Apply the CPU move chosen by `begin_cpu_turn`.
    ///
    /// Returns `Ok(None)` if no CPU move was pending.
    pub fn commit_cpu_turn(&self) -> Result<Option<MoveOutcome>, MoveError> {
        let mut inner = self.lock();
        match inner.pending_cpu.take() {
            Some(pit) => inner.game.play_move(pit, Side::Cpu).map(Some),
            None => Ok(None),
        }
    }

    /// Sweep the stores and end the game.
    pub fn finalize(&self) -> SideMap<u8> {
        let mut inner = self.lock();
        inner.pending_cpu = None;
        inner.game.finalize()
    }

    /// Start a new game, dropping any pending CPU move.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.pending_cpu = None;
        inner.game.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_cpu_move_blocks_other_moves() {
        let shared = SharedGame::new(Game::new());
        shared.play_move(0, Side::Player).unwrap();

        let pit = shared.begin_cpu_turn().unwrap().unwrap();
        assert!(shared.cpu_move_pending());
        assert_eq!(shared.play_move(1, Side::Player), Err(MoveError::MoveInProgress));
        assert_eq!(shared.begin_cpu_turn(), Err(MoveError::MoveInProgress));

        let outcome = shared.commit_cpu_turn().unwrap().unwrap();
        assert_eq!(outcome.pit, pit);
        assert!(!shared.cpu_move_pending());
    }

    #[test]
    fn test_begin_cpu_turn_out_of_turn() {
        let shared = SharedGame::new(Game::new());
        assert_eq!(
            shared.begin_cpu_turn(),
            Err(MoveError::NotYourTurn { mover: Side::Cpu, expected: Side::Player })
        );
        assert!(!shared.cpu_move_pending());
    }

    #[test]
    fn test_commit_without_pending_is_noop() {
        let shared = SharedGame::new(Game::new());
        let before = shared.snapshot();
        assert_eq!(shared.commit_cpu_turn(), Ok(None));
        assert_eq!(shared.snapshot(), before);
    }

    #[test]
    fn test_no_cpu_move_finalizes() {
        let board = Board::from_slots([4, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 24]);
        let shared = SharedGame::new(Game::from_board(board, Side::Cpu));

        assert_eq!(shared.begin_cpu_turn(), Ok(None));
        assert_eq!(shared.phase(), Phase::GameOver);
        assert_eq!(shared.snapshot().store(Side::Player), 24);
    }

    #[test]
    fn test_reset_clears_pending() {
        let shared = SharedGame::new(Game::new());
        shared.play_move(0, Side::Player).unwrap();
        shared.begin_cpu_turn().unwrap();

        shared.reset();

        assert!(!shared.cpu_move_pending());
        assert_eq!(shared.phase(), Phase::AwaitingPlayer);
        assert_eq!(shared.snapshot(), Board::new());
    }
}
