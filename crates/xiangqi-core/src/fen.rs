//! Placement-string parsing and serialization for [`Board`].
//!
//! The notation mirrors FEN piece placement: 10 ranks from row 9 (Black's
//! back rank) down to row 0, separated by `/`, with digits 1-9 encoding runs
//! of empty cells. Uppercase letters are Red pieces, lowercase are Black.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::board::Board;
use crate::coord::Coord;
use crate::error::FenError;
use crate::piece::Piece;

/// The placement string for the standard opening position.
pub const STARTING_FEN: &str = "rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAKAEHR";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(placement: &str) -> Result<Board, FenError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != Board::ROWS as usize {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // Ranks run from row 9 (top) down to row 0.
            let row = Board::ROWS - 1 - rank_index as i8;
            let mut col: i8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=9).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    col += digit as i8;
                    // Reject overlong ranks as they happen, so a run of
                    // digits can never drive the accumulator toward overflow.
                    if col > Board::COLS {
                        return Err(FenError::BadRankLength {
                            rank_index,
                            length: col as usize,
                        });
                    }
                } else {
                    let piece = Piece::from_fen_char(c)
                        .ok_or(FenError::InvalidPieceChar { character: c })?;
                    let Some(at) = Coord::new(row, col) else {
                        return Err(FenError::BadRankLength {
                            rank_index,
                            length: col as usize + 1,
                        });
                    };
                    board.set(at, Some(piece));
                    col += 1;
                }
            }

            if col != Board::COLS {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: col as usize,
                });
            }
        }

        Ok(board)
    }
}

impl Board {
    /// Serialize the placement to its notation string.
    pub fn fen(&self) -> String {
        let mut out = String::new();
        for row in (0..Board::ROWS).rev() {
            let mut run = 0u32;
            for col in 0..Board::COLS {
                let at = Coord::new(row, col).expect("grid iteration stays in range");
                match self.piece_at(at) {
                    Some(piece) => {
                        if run > 0 {
                            let _ = write!(out, "{run}");
                            run = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                let _ = write!(out, "{run}");
            }
            if row > 0 {
                out.push('/');
            }
        }
        out
    }
}
