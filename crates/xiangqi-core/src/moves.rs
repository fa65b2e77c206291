//! Move representation: an ordered (from, to) coordinate pair.

use std::fmt;

use crate::coord::Coord;

/// A move from one cell to another.
///
/// No captured piece is tracked: applying a move overwrites whatever stood on
/// the destination. The derived `Ord` orders moves by the full
/// (from.row, from.col, to.row, to.col) tuple, which is the deduplication key
/// used by enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    /// The origin cell.
    pub from: Coord,
    /// The destination cell.
    pub to: Coord,
}

impl Move {
    /// Create a move from origin and destination cells.
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Move {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
