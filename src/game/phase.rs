//! Game phases.
//!
//! ```text
//!  AwaitingPlayer --(no extra turn)--> AwaitingCpu
//!        ^  |                            |  ^
//!        |  +--(extra turn)              |  +--(extra turn)
//!        +------(no extra turn)----------+
//!
//!  any --finalize--> GameOver --reset--> AwaitingPlayer
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The human must pick one of pits 0-5.
    AwaitingPlayer,
    /// The CPU must move.
    AwaitingCpu,
    /// Stones have been swept; no further moves.
    GameOver,
}

impl Phase {
    /// The phase in which `side` is to move.
    #[must_use]
    pub const fn awaiting(side: Side) -> Self {
        match side {
            Side::Player => Phase::AwaitingPlayer,
            Side::Cpu => Phase::AwaitingCpu,
        }
    }

    /// The side to move, or `None` once the game is over.
    #[must_use]
    pub const fn to_move(self) -> Option<Side> {
        match self {
            Phase::AwaitingPlayer => Some(Side::Player),
            Phase::AwaitingCpu => Some(Side::Cpu),
            Phase::GameOver => None,
        }
    }

    /// Phase after `mover` completes a non-terminal move.
    #[must_use]
    pub const fn after_move(mover: Side, extra_turn: bool) -> Self {
        if extra_turn {
            Phase::awaiting(mover)
        } else {
            Phase::awaiting(mover.opponent())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_side() {
        for side in Side::BOTH {
            assert_eq!(Phase::awaiting(side).to_move(), Some(side));
        }
        assert_eq!(Phase::GameOver.to_move(), None);
    }

    #[test]
    fn test_after_move() {
        assert_eq!(Phase::after_move(Side::Player, true), Phase::AwaitingPlayer);
        assert_eq!(Phase::after_move(Side::Player, false), Phase::AwaitingCpu);
        assert_eq!(Phase::after_move(Side::Cpu, true), Phase::AwaitingCpu);
        assert_eq!(Phase::after_move(Side::Cpu, false), Phase::AwaitingPlayer);
    }
}
