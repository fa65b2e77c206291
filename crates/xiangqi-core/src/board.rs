//! The 10×9 board: piece placement and its basic queries.

use std::fmt;

use crate::color::Color;
use crate::coord::Coord;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// A Xiangqi position: 10 rows × 9 columns of cells, each empty or holding
/// one piece.
///
/// Boards are immutable from the caller's point of view: every operation that
/// "changes" a position ([`apply_move`](Board::apply_move)) returns a new
/// board by copy-make.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Board::CELLS],
}

impl Board {
    /// Number of rows.
    pub const ROWS: i8 = 10;
    /// Number of columns.
    pub const COLS: i8 = 9;
    /// Total number of cells.
    pub const CELLS: usize = (Board::ROWS * Board::COLS) as usize;

    /// Return an empty board.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Board::CELLS],
        }
    }

    /// Return the standard opening position.
    ///
    /// Red occupies rows 0-4 (back rank on row 0), Black mirrors it from
    /// row 9 down.
    pub fn starting_position() -> Board {
        const BACK_RANK: [PieceKind; 9] = [
            PieceKind::Chariot,
            PieceKind::Horse,
            PieceKind::Elephant,
            PieceKind::Guard,
            PieceKind::General,
            PieceKind::Guard,
            PieceKind::Elephant,
            PieceKind::Horse,
            PieceKind::Chariot,
        ];

        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            board.place(0, col, Piece::new(kind, Color::Red));
            board.place(9, col, Piece::new(kind, Color::Black));
        }
        for col in [1, 7] {
            board.place(2, col, Piece::RED_CANNON);
            board.place(7, col, Piece::BLACK_CANNON);
        }
        for col in [0, 2, 4, 6, 8] {
            board.place(3, col, Piece::RED_SOLDIER);
            board.place(6, col, Piece::BLACK_SOLDIER);
        }
        board
    }

    /// Build a board from a caller-supplied grid of cells, row 0 first.
    ///
    /// This is the validation boundary for externally produced snapshots: the
    /// grid must be exactly 10 rows of 9 cells.
    ///
    /// # Errors
    ///
    /// [`BoardError::WrongRowCount`] or [`BoardError::WrongColumnCount`] when
    /// the grid is not 10×9.
    pub fn from_grid(rows: &[Vec<Option<Piece>>]) -> Result<Board, BoardError> {
        if rows.len() != Board::ROWS as usize {
            return Err(BoardError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != Board::COLS as usize {
                return Err(BoardError::WrongColumnCount {
                    row_index,
                    found: row.len(),
                });
            }
            for (col, &cell) in row.iter().enumerate() {
                if let Some(piece) = cell {
                    board.place(row_index as i8, col as i8, piece);
                }
            }
        }
        Ok(board)
    }

    /// Return the piece on the given cell, if any.
    #[inline]
    pub const fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.cells[at.index()]
    }

    /// Return `true` if the given cell is empty.
    #[inline]
    pub const fn is_empty(&self, at: Coord) -> bool {
        self.cells[at.index()].is_none()
    }

    /// Return `true` if the given cell holds a piece of `color`.
    #[inline]
    pub fn is_color(&self, at: Coord, color: Color) -> bool {
        self.piece_at(at).is_some_and(|piece| piece.color() == color)
    }

    /// Iterate over every (cell, piece) of the given side, row-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(move |at| {
            let piece = self.piece_at(at)?;
            (piece.color() == color).then_some((at, piece))
        })
    }

    /// Set a cell. Interior mutation used by construction and move
    /// application; callers only ever see finished boards.
    #[inline]
    pub(crate) fn set(&mut self, at: Coord, cell: Option<Piece>) {
        self.cells[at.index()] = cell;
    }

    /// Place a piece at raw (row, col) during construction.
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is off the grid; construction code only uses
    /// in-range constants.
    fn place(&mut self, row: i8, col: i8, piece: Piece) {
        let at = Coord::new(row, col).expect("construction coordinates are in range");
        self.set(at, Some(piece));
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..Board::ROWS).rev() {
            write!(f, "{row} ")?;
            for col in 0..Board::COLS {
                let at = Coord::new(row, col).expect("grid iteration stays in range");
                match self.piece_at(at) {
                    Some(piece) => write!(f, " {}", piece.chinese_char())?,
                    None => write!(f, " ・")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for c in 'a'..='i' {
            write!(f, "  {c}")?;
        }
        writeln!(f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board({})", self.fen())?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::error::BoardError;
    use crate::piece::Piece;

    fn at(row: i8, col: i8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn empty_board_has_no_pieces() {
        let board = Board::empty();
        assert!(Coord::all().all(|c| board.is_empty(c)));
    }

    #[test]
    fn starting_position_piece_counts() {
        let board = Board::starting_position();
        assert_eq!(board.pieces_of(Color::Red).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn starting_position_landmarks() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(at(0, 4)), Some(Piece::RED_GENERAL));
        assert_eq!(board.piece_at(at(9, 4)), Some(Piece::BLACK_GENERAL));
        assert_eq!(board.piece_at(at(2, 1)), Some(Piece::RED_CANNON));
        assert_eq!(board.piece_at(at(7, 7)), Some(Piece::BLACK_CANNON));
        assert_eq!(board.piece_at(at(3, 4)), Some(Piece::RED_SOLDIER));
        assert_eq!(board.piece_at(at(6, 8)), Some(Piece::BLACK_SOLDIER));
        assert!(board.is_empty(at(4, 4)));
        assert!(board.is_empty(at(5, 4)));
    }

    #[test]
    fn is_color_queries() {
        let board = Board::starting_position();
        assert!(board.is_color(at(0, 0), Color::Red));
        assert!(!board.is_color(at(0, 0), Color::Black));
        assert!(!board.is_color(at(4, 4), Color::Red));
    }

    #[test]
    fn from_grid_roundtrip() {
        let start = Board::starting_position();
        let grid: Vec<Vec<Option<Piece>>> = (0..10)
            .map(|row| (0..9).map(|col| start.piece_at(at(row, col))).collect())
            .collect();
        assert_eq!(Board::from_grid(&grid).unwrap(), start);
    }

    #[test]
    fn from_grid_rejects_wrong_row_count() {
        let grid: Vec<Vec<Option<Piece>>> = vec![vec![None; 9]; 9];
        assert_eq!(
            Board::from_grid(&grid),
            Err(BoardError::WrongRowCount { found: 9 })
        );
    }

    #[test]
    fn from_grid_rejects_ragged_row() {
        let mut grid: Vec<Vec<Option<Piece>>> = vec![vec![None; 9]; 10];
        grid[4] = vec![None; 8];
        assert_eq!(
            Board::from_grid(&grid),
            Err(BoardError::WrongColumnCount {
                row_index: 4,
                found: 8
            })
        );
    }
}
