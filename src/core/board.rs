//! The 14-slot Kalah board.
//!
//! ## Layout
//!
//! ```text
//!        12  11  10   9   8   7
//!   [13]                         [6]
//!         0   1   2   3   4   5
//! ```
//!
//! - Indices 0-5: player pits, 6: player store
//! - Indices 7-12: CPU pits (rendered mirrored), 13: CPU store
//!
//! Sowing walks indices upward (`i -> (i + 1) % 14`), which is
//! counter-clockwise on the rendered board.
//!
//! `Board` is `Copy`, so a scratch copy for simulation is a plain value copy
//! and can never alias the live board.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::side::Side;

/// Number of slots (pits and stores).
pub const BOARD_SLOTS: usize = 14;

/// Pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// Stones in each pit at the start of a game.
pub const INITIAL_STONES: u8 = 4;

/// Total stones in a fresh game.
pub const TOTAL_STONES: u32 = INITIAL_STONES as u32 * (2 * PITS_PER_SIDE) as u32;

/// Player store index.
pub const PLAYER_STORE: usize = 6;

/// CPU store index.
pub const CPU_STORE: usize = 13;

/// Stone counts for all 14 slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    slots: [u8; BOARD_SLOTS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A fresh board: four stones in every pit, both stores empty.
    #[must_use]
    pub fn new() -> Self {
        let mut slots = [INITIAL_STONES; BOARD_SLOTS];
        slots[PLAYER_STORE] = 0;
        slots[CPU_STORE] = 0;
        Self { slots }
    }

    /// Build a board from explicit slot counts.
    ///
    /// The total need not be 48; conservation is checked per move.
    ///
    /// ```
    /// use kalah_engine::core::Board;
    ///
    /// let board = Board::from_slots([6, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
    /// assert_eq!(board[0], 6);
    /// assert_eq!(board.total(), 50);
    /// ```
    #[must_use]
    pub const fn from_slots(slots: [u8; BOARD_SLOTS]) -> Self {
        Self { slots }
    }

    /// Read-only view of all slots.
    #[must_use]
    pub fn slots(&self) -> &[u8; BOARD_SLOTS] {
        &self.slots
    }

    /// Stones in slot `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied()
    }

    /// Stones in a side's store.
    #[must_use]
    pub fn store(&self, side: Side) -> u8 {
        self.slots[side.store()]
    }

    /// Stones in a side's six pits, stores excluded.
    #[must_use]
    pub fn pit_total(&self, side: Side) -> u32 {
        side.pits().map(|i| u32::from(self.slots[i])).sum()
    }

    /// Stones on the whole board.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.slots.iter().map(|&s| u32::from(s)).sum()
    }

    /// Whether all six of a side's pits are empty.
    #[must_use]
    pub fn is_side_empty(&self, side: Side) -> bool {
        side.pits().all(|i| self.slots[i] == 0)
    }

    /// Non-empty pits of a side, ascending.
    pub fn non_empty_pits(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        side.pits().filter(move |&i| self.slots[i] > 0)
    }

    /// The pit facing `pit` across the board.
    ///
    /// The single mapping used by captures and by the CPU's simulation.
    /// Player pit `p` faces CPU pit `12 - p` and vice versa.
    ///
    /// ```
    /// use kalah_engine::core::Board;
    ///
    /// assert_eq!(Board::opposite(0), 12);
    /// assert_eq!(Board::opposite(2), 10);
    /// assert_eq!(Board::opposite(9), 3);
    /// ```
    #[must_use]
    pub const fn opposite(pit: usize) -> usize {
        debug_assert!(pit != PLAYER_STORE && pit < CPU_STORE);
        12 - pit
    }

    /// The slot after `index` when `mover` is sowing.
    ///
    /// Skips the opponent's store.
    #[must_use]
    pub fn next_slot(index: usize, mover: Side) -> usize {
        let next = (index + 1) % BOARD_SLOTS;
        if next == mover.opponent().store() {
            (next + 1) % BOARD_SLOTS
        } else {
            next
        }
    }

    // === Mutation (engine only) ===

    /// Empty a slot, returning how many stones it held.
    pub(crate) fn take(&mut self, index: usize) -> u8 {
        std::mem::take(&mut self.slots[index])
    }

    /// Add stones to a slot.
    pub(crate) fn add(&mut self, index: usize, stones: u8) {
        self.slots[index] += stones;
    }

    // === Invariants ===

    /// Panic if `after` is not a legal successor of `before`.
    ///
    /// Checks stone conservation and store monotonicity.
    pub fn assert_transition(before: &Board, after: &Board) {
        assert_eq!(
            before.total(),
            after.total(),
            "stone total changed: {before:?} -> {after:?}"
        );
        for side in Side::BOTH {
            assert!(
                after.store(side) >= before.store(side),
                "{side} store decreased: {} -> {}",
                before.store(side),
                after.store(side)
            );
        }
    }
}

impl Index<usize> for Board {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CPU Store (13): {}", self.slots[CPU_STORE])?;
        write!(f, "CPU Pits:    ")?;
        for i in Side::Cpu.pits().rev() {
            write!(f, "{} ", self.slots[i])?;
        }
        writeln!(f)?;
        write!(f, "Player Pits: ")?;
        for i in Side::Player.pits() {
            write!(f, "{} ", self.slots[i])?;
        }
        writeln!(f)?;
        write!(f, "Player Store (6): {}", self.slots[PLAYER_STORE])
    }
}
