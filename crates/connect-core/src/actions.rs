//! Moves that drivers can submit to the engine.
//!
//! External input is arbitrary text or numbers; rather than probing types at
//! runtime, anything a driver hands the engine is first tagged as either a
//! column drop or malformed input. `is_applicable` is total over both, and
//! only `transition` turns a bad tag into an error.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// A move as submitted by an external driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Drop a piece into the given column (0-based, left to right)
    Drop(usize),
    /// Input that could not be parsed as a column index
    Malformed,
}

impl GameAction {
    /// The target column, if this is a well-formed drop
    pub fn column(&self) -> Option<usize> {
        match self {
            GameAction::Drop(col) => Some(*col),
            GameAction::Malformed => None,
        }
    }
}

impl From<usize> for GameAction {
    fn from(col: usize) -> Self {
        GameAction::Drop(col)
    }
}

impl FromStr for GameAction {
    type Err = Infallible;

    /// Parsing never fails; unparsable text becomes `Malformed` so that
    /// legality predicates stay total over raw driver input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<usize>() {
            Ok(col) => GameAction::Drop(col),
            Err(_) => GameAction::Malformed,
        })
    }
}
