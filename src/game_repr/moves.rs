use std::fmt;

use super::bitboards::{KNIGHT_OFFSETS, BOARD_SIZE};
use super::Cell;

/// One of the eight knight jumps, in the order actions are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Nne,
    Ene,
    Ese,
    Sse,
    Ssw,
    Wsw,
    Wnw,
    Nnw,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Nne,
        Direction::Ene,
        Direction::Ese,
        Direction::Sse,
        Direction::Ssw,
        Direction::Wsw,
        Direction::Wnw,
        Direction::Nnw,
    ];

    /// Signed bit offset of this jump
    pub fn offset(self) -> i32 {
        KNIGHT_OFFSETS[self as usize]
    }

    /// Target index of the jump from `from`, if it lands inside the addressable range.
    /// Padding cells are not filtered here; the open-cell bitboard never has them set.
    pub fn target(self, from: Cell) -> Option<Cell> {
        let target = from as i32 + self.offset();
        if target >= 0 && (target as usize) < BOARD_SIZE {
            Some(target as usize)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Nne => "NNE",
            Direction::Ene => "ENE",
            Direction::Ese => "ESE",
            Direction::Sse => "SSE",
            Direction::Ssw => "SSW",
            Direction::Wsw => "WSW",
            Direction::Wnw => "WNW",
            Direction::Nnw => "NNW",
        }
    }
}

/// A legal step in knight's Isolation.
///
/// While a player has not been placed yet its actions are `Place` for every open
/// cell; afterwards they are knight jumps relative to its current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Place(Cell),
    Jump(Direction),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(cell) => write!(f, "place@{}", cell),
            Action::Jump(dir) => write!(f, "{}", dir.name()),
        }
    }
}
