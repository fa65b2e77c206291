//! Board coordinates: a checked (row, column) pair on the 10×9 grid.

use std::fmt;

use crate::board::Board;

/// A cell on the board. Row 0 is Red's back rank; row 9 is Black's.
///
/// Construction is bounds-checked, so a `Coord` value always names a real
/// cell: row ∈ 0..10, col ∈ 0..9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    row: i8,
    col: i8,
}

impl Coord {
    /// Create a coordinate, or `None` if it falls outside the 10×9 grid.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Option<Coord> {
        if row >= 0 && row < Board::ROWS && col >= 0 && col < Board::COLS {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Return the row (0..10).
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Return the column (0..9).
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Shift by a (row, column) delta, or `None` if the result leaves the grid.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Coord> {
        Coord::new(self.row + dr, self.col + dc)
    }

    /// Return the row-major cell index (0..90) for array addressing.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row * Board::COLS + self.col) as usize
    }

    /// Iterate every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..Board::ROWS).flat_map(|row| (0..Board::COLS).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::Coord;

    #[test]
    fn new_bounds() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(9, 8).is_some());
        assert!(Coord::new(10, 0).is_none());
        assert!(Coord::new(0, 9).is_none());
        assert!(Coord::new(-1, 0).is_none());
        assert!(Coord::new(0, -1).is_none());
    }

    #[test]
    fn offset_checked() {
        let c = Coord::new(0, 0).unwrap();
        assert_eq!(c.offset(1, 1), Coord::new(1, 1));
        assert_eq!(c.offset(-1, 0), None);
        assert_eq!(c.offset(0, -1), None);
    }

    #[test]
    fn index_covers_grid_without_collision() {
        let mut seen = [false; 90];
        for c in Coord::all() {
            assert!(!seen[c.index()], "duplicate index for {c}");
            seen[c.index()] = true;
        }
        assert!(seen.iter().all(|&v| v));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Coord::new(0, 0).unwrap()), "a0");
        assert_eq!(format!("{}", Coord::new(9, 8).unwrap()), "i9");
    }
}
