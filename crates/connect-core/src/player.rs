//! Player tags and the numeric encoding used on the wire.
//!
//! The engine identifies players by color. The numeric values mirror the
//! cell encoding consumers see: Red = -1, Yellow = +1, empty = 0.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Encoded as -1. Moves first in the standard configuration.
    Red,
    /// Encoded as +1.
    Yellow,
}

impl Player {
    /// Both players, in encoding order
    pub const ALL: [Player; 2] = [Player::Red, Player::Yellow];

    /// The other player
    pub fn opponent(&self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Numeric encoding of this player (-1 or +1, never 0)
    pub fn value(&self) -> i8 {
        match self {
            Player::Red => -1,
            Player::Yellow => 1,
        }
    }

    /// Decode a numeric player value; 0 and anything else is not a player
    pub fn from_value(value: i8) -> Option<Player> {
        match value {
            -1 => Some(Player::Red),
            1 => Some(Player::Yellow),
            _ => None,
        }
    }
}

impl Default for Player {
    /// Red moves first
    fn default() -> Self {
        Player::Red
    }
}
