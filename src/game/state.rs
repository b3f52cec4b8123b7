//! The game state machine.
//!
//! `Game` owns the live board and is the only path that mutates it. Hosts
//! (a UI, a test, a playout loop) call `apply_move` / `finalize` and poll
//! `phase()` and `board()`; the engine never calls back into them.
//!
//! ## Turn flow
//!
//! ```
//! use kalah_engine::game::{Game, Phase};
//!
//! let mut game = Game::new();
//! assert_eq!(game.phase(), Phase::AwaitingPlayer);
//!
//! // Pit 2 holds four stones: 3, 4, 5 and the store. Extra turn.
//! let outcome = game.play(2).unwrap();
//! assert!(outcome.extra_turn);
//! assert_eq!(game.phase(), Phase::AwaitingPlayer);
//!
//! // Pit 0 ends in pit 4: the CPU is up.
//! game.play(0).unwrap();
//! assert_eq!(game.phase(), Phase::AwaitingCpu);
//!
//! let cpu = game.play_cpu_turn().unwrap();
//! assert!(cpu.is_some());
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{info, instrument, warn};

use crate::ai::choose_cpu_move;
use crate::core::{Board, EngineConfig, MoveRecord, Side, SideMap};
use crate::rules::{self, GameResult, MoveError};

use super::phase::Phase;

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The side that moved.
    pub side: Side,
    /// Source pit.
    pub pit: usize,
    /// Last stone landed in the mover's store; the mover goes again.
    pub extra_turn: bool,
    /// Stones moved into the mover's store by a capture (0 = none).
    pub captured: u8,
    /// Slot of the last stone.
    pub last_pit: usize,
    /// One side's pits are now empty; `finalize` must run.
    pub terminal: bool,
}

/// A single Kalah game between the human and the CPU.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    phase: Phase,
    config: EngineConfig,
    history: Vector<MoveRecord>,
    moves_played: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game with default configuration. The human moves first.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// A fresh game with the given configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        info!("game initialized");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingPlayer,
            config,
            history: Vector::new(),
            moves_played: 0,
        }
    }

    /// Start from a prepared position with `to_move` on turn.
    #[must_use]
    pub fn from_board(board: Board, to_move: Side) -> Self {
        Self {
            board,
            phase: Phase::awaiting(to_move),
            ..Self::with_config(EngineConfig::default())
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_engine_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Discard the board, phase and history and start over.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.phase = Phase::AwaitingPlayer;
        self.history = Vector::new();
        self.moves_played = 0;
        info!("game reset");
    }

    // === Read-only views ===

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A copy of the board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The side to move, or `None` once the game is over.
    #[must_use]
    pub fn current_side(&self) -> Option<Side> {
        self.phase.to_move()
    }

    /// Whether the game has been finalized.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Moves committed this game, oldest first.
    ///
    /// Empty when `record_history` is off.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of moves committed this game.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Pits `side` may play right now.
    ///
    /// Empty when it is not `side`'s turn, the game is over, or the board is
    /// terminal and awaiting `finalize`.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> SmallVec<[usize; 6]> {
        if self.current_side() != Some(side) || self.is_terminal() {
            return SmallVec::new();
        }
        self.board.non_empty_pits(side).collect()
    }

    /// Whether one side's pits are all empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(&self.board)
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_game_over().then(|| rules::outcome(&self.board))
    }

    // === Moves ===

    /// Play `pit` for `mover`: sow, capture, and pass the turn unless the
    /// move earned an extra turn.
    ///
    /// When the returned outcome is `terminal` the phase stays put and the
    /// caller must `finalize`. On `Err` the board is untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&mut self, pit: usize, mover: Side) -> Result<MoveOutcome, MoveError> {
        self.validate(pit, mover)?;

        let before = self.board;
        let sow = rules::sow(&mut self.board, pit, mover);
        self.check_invariants(&before);

        let terminal = self.is_terminal();
        if !terminal {
            self.phase = Phase::after_move(mover, sow.extra_turn);
        }

        let outcome = MoveOutcome {
            side: mover,
            pit,
            extra_turn: sow.extra_turn,
            captured: sow.captured,
            last_pit: sow.last_pit().unwrap_or(pit),
            terminal,
        };

        if self.config.record_history {
            self.history.push_back(MoveRecord {
                side: mover,
                pit,
                stones: sow.stones,
                path: sow.path,
                extra_turn: sow.extra_turn,
                captured: sow.captured,
                sequence: self.moves_played,
            });
        }
        self.moves_played += 1;

        Ok(outcome)
    }

    /// Sweep remaining stones into the stores and end the game.
    ///
    /// Returns how many stones each side collected. A second call is a no-op.
    pub fn finalize(&mut self) -> SideMap<u8> {
        if self.is_game_over() {
            return SideMap::with_value(0);
        }

        let before = self.board;
        let swept = rules::finalize(&mut self.board);
        self.check_invariants(&before);
        self.phase = Phase::GameOver;

        let player = self.board.store(Side::Player);
        let cpu = self.board.store(Side::Cpu);
        match rules::outcome(&self.board) {
            GameResult::Winner(side) => info!(winner = %side, player, cpu, "game over"),
            GameResult::Draw => info!(player, cpu, "game over: tie"),
        }

        swept
    }

    /// The CPU heuristic's pick for the current board.
    ///
    /// `None` means the CPU has no stones to sow: the game must be finalized.
    #[must_use]
    pub fn choose_cpu_move(&self) -> Option<usize> {
        choose_cpu_move(&self.board)
    }

    /// A full move: `apply_move`, then `finalize` if the board went terminal.
    pub fn play_move(&mut self, pit: usize, mover: Side) -> Result<MoveOutcome, MoveError> {
        let outcome = self.apply_move(pit, mover)?;
        if outcome.terminal {
            self.finalize();
        }
        Ok(outcome)
    }

    /// A full human move.
    pub fn play(&mut self, pit: usize) -> Result<MoveOutcome, MoveError> {
        self.play_move(pit, Side::Player)
    }

    /// Choose and play the CPU's move.
    ///
    /// Returns `Ok(None)` when the CPU had no move (or the board was already
    /// terminal), in which case the game has been finalized.
    pub fn play_cpu_turn(&mut self) -> Result<Option<MoveOutcome>, MoveError> {
        match self.phase {
            Phase::GameOver => return Err(MoveError::GameOver),
            Phase::AwaitingPlayer => {
                return Err(MoveError::NotYourTurn {
                    mover: Side::Cpu,
                    expected: Side::Player,
                })
            }
            Phase::AwaitingCpu => {}
        }

        if self.is_terminal() {
            self.finalize();
            return Ok(None);
        }

        match self.choose_cpu_move() {
            Some(pit) => self.play_move(pit, Side::Cpu).map(Some),
            None => {
                warn!("no valid move for CPU");
                self.finalize();
                Ok(None)
            }
        }
    }

    fn validate(&self, pit: usize, mover: Side) -> Result<(), MoveError> {
        let expected = self.phase.to_move().ok_or(MoveError::GameOver)?;
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if mover != expected {
            return Err(MoveError::NotYourTurn { mover, expected });
        }
        if !mover.owns_pit(pit) {
            return Err(MoveError::PitOutOfRange { pit, side: mover });
        }
        if self.board[pit] == 0 {
            return Err(MoveError::EmptyPit { pit });
        }
        Ok(())
    }

    fn check_invariants(&self, before: &Board) {
        if self.config.verify_invariants {
            Board::assert_transition(before, &self.board);
        } else {
            debug_assert_eq!(before.total(), self.board.total(), "stone total changed");
        }
    }
}
