//! Sides of the board and per-side data storage.
//!
//! ## Side
//!
//! The two participants: the human `Player` and the computer `Cpu`.
//! Each side owns six pits and one store.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, RangeInclusive};

use super::board::{CPU_STORE, PLAYER_STORE};

/// One of the two sides of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player: pits 0-5, store 6.
    Player,
    /// The computer opponent: pits 7-12, store 13.
    Cpu,
}

impl Side {
    /// Both sides, player first.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Cpu];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }

    /// Board index of this side's store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Side::Player => PLAYER_STORE,
            Side::Cpu => CPU_STORE,
        }
    }

    /// Board indices of this side's six pits, in sowing order.
    ///
    /// ```
    /// use kalah_engine::core::Side;
    ///
    /// assert_eq!(Side::Player.pits(), 0..=5);
    /// assert_eq!(Side::Cpu.pits(), 7..=12);
    /// ```
    #[must_use]
    pub fn pits(self) -> RangeInclusive<usize> {
        match self {
            Side::Player => 0..=5,
            Side::Cpu => 7..=12,
        }
    }

    /// Whether `index` is one of this side's pits (stores excluded).
    #[must_use]
    pub fn owns_pit(self, index: usize) -> bool {
        self.pits().contains(&index)
    }

    /// The side owning pit `index`, or `None` for stores and out-of-range indices.
    #[must_use]
    pub fn of_pit(index: usize) -> Option<Side> {
        Side::BOTH.into_iter().find(|side| side.owns_pit(index))
    }

    const fn slot(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Cpu => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Cpu => write!(f, "CPU"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use kalah_engine::core::{Side, SideMap};
///
/// let mut swept: SideMap<u32> = SideMap::with_value(0);
/// swept[Side::Cpu] += 7;
///
/// assert_eq!(swept[Side::Player], 0);
/// assert_eq!(swept[Side::Cpu], 7);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Cpu)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.slot()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for side in Side::BOTH {
            assert_ne!(side, side.opponent());
            assert_eq!(side, side.opponent().opponent());
        }
    }

    #[test]
    fn test_stores() {
        assert_eq!(Side::Player.store(), 6);
        assert_eq!(Side::Cpu.store(), 13);
    }

    #[test]
    fn test_owns_pit_excludes_stores() {
        assert!(Side::Player.owns_pit(0));
        assert!(Side::Player.owns_pit(5));
        assert!(!Side::Player.owns_pit(6));
        assert!(!Side::Player.owns_pit(7));

        assert!(Side::Cpu.owns_pit(7));
        assert!(Side::Cpu.owns_pit(12));
        assert!(!Side::Cpu.owns_pit(13));
        assert!(!Side::Cpu.owns_pit(0));
    }

    #[test]
    fn test_of_pit() {
        assert_eq!(Side::of_pit(3), Some(Side::Player));
        assert_eq!(Side::of_pit(9), Some(Side::Cpu));
        assert_eq!(Side::of_pit(6), None);
        assert_eq!(Side::of_pit(13), None);
        assert_eq!(Side::of_pit(14), None);
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::new(|side| side.store());
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &6), (Side::Cpu, &13)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map: SideMap<u8> = SideMap::new(|side| side.store() as u8);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
