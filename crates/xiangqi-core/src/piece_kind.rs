//! Xiangqi piece kinds.

use std::fmt;

/// The kind of a Xiangqi piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Soldier = 0,
    General = 1,
    Guard = 2,
    Chariot = 3,
    Cannon = 4,
    Horse = 5,
    Elephant = 6,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 7;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Soldier,
        PieceKind::General,
        PieceKind::Guard,
        PieceKind::Chariot,
        PieceKind::Cannon,
        PieceKind::Horse,
        PieceKind::Elephant,
    ];

    /// Return the index (0..6).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the notation character for this piece kind (lowercase).
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Soldier => 'p',
            PieceKind::General => 'k',
            PieceKind::Guard => 'a',
            PieceKind::Chariot => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Horse => 'h',
            PieceKind::Elephant => 'e',
        }
    }

    /// Parse a notation character (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Soldier),
            'k' => Some(PieceKind::General),
            'a' => Some(PieceKind::Guard),
            'r' => Some(PieceKind::Chariot),
            'c' => Some(PieceKind::Cannon),
            'h' => Some(PieceKind::Horse),
            'e' => Some(PieceKind::Elephant),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}
