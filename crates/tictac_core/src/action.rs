//! First-class move type.
//!
//! A move is a domain event: which side stamped which cell. The engine hands
//! one back from every applied move so callers can log or display it.

use crate::types::{Coordinate, Turn};
use serde::{Deserialize, Serialize};

/// A side placing its mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side that moved.
    pub turn: Turn,
    /// Where it moved.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    pub fn new(turn: Turn, coordinate: Coordinate) -> Self {
        Self { turn, coordinate }
    }

    /// Returns the side making this move.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the position of this move.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.turn, self.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_mover_mark_and_label() {
        let mov = Move::new(Turn::Computer, Coordinate::new(2, 0));
        assert_eq!(mov.to_string(), "Computer ░ A3");
    }
}
