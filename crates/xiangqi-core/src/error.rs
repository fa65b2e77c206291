//! Error types for position parsing, board validation, and move application.

use std::fmt;

use crate::coord::Coord;

/// Errors that occur when parsing a position placement string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The placement does not have exactly 10 slash-separated ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 9 cells.
    BadRankLength {
        /// Zero-based rank index (0 = row 9 in the string, 9 = row 0).
        rank_index: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongRankCount { found } => {
                write!(f, "expected 10 ranks in placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(f, "rank {rank_index} describes {length} cells, expected 9")
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Errors from structural validation of a caller-supplied grid.
///
/// A [`Board`](crate::board::Board) built by this crate is well-formed by
/// construction; these only arise at the ingestion boundary
/// ([`Board::from_grid`](crate::board::Board::from_grid)).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The grid does not have exactly 10 rows.
    #[error("expected 10 rows, found {found}")]
    WrongRowCount {
        /// Number of rows supplied.
        found: usize,
    },
    /// A row does not have exactly 9 cells.
    #[error("row {row_index} has {found} cells, expected 9")]
    WrongColumnCount {
        /// Zero-based row index.
        row_index: usize,
        /// Number of cells in that row.
        found: usize,
    },
}

/// Errors from [`Board::apply_move`](crate::board::Board::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The source cell holds no piece.
    #[error("no piece on source cell {from}")]
    EmptySource {
        /// The requested source cell.
        from: Coord,
    },
}
