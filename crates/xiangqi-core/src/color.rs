//! Piece colors and the side-relative board geometry (forward direction,
//! river crossing, palace rows).

use std::fmt;
use std::ops::{Not, RangeInclusive};

/// A piece color: Red or Black.
///
/// Red's home half is rows 0-4 and Red soldiers advance toward row 9;
/// Black mirrors this from rows 5-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    /// Return the index (0 for Red, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row delta of one forward step, toward the enemy side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }

    /// Return `true` if a piece of this color standing on `row` has crossed
    /// the river (the row-4/row-5 midline).
    #[inline]
    pub const fn has_crossed_river(self, row: i8) -> bool {
        match self {
            Color::Red => row > 4,
            Color::Black => row <= 4,
        }
    }

    /// The three home rows of this side's palace. Palace columns are 3..=5
    /// for both sides.
    #[inline]
    pub const fn palace_rows(self) -> RangeInclusive<i8> {
        match self {
            Color::Red => 0..=2,
            Color::Black => 7..=9,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "r"),
            Color::Black => write!(f, "b"),
        }
    }
}
