//! Colored Xiangqi piece, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored Xiangqi piece, bit-packed into a single byte.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-6)
/// - bit 3: [`Color`] (0 = Red, 1 = Black)
///
/// Valid raw values are 0-6 (Red pieces) and 8-14 (Black pieces).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// All 14 valid pieces in order (Red 0-6, Black 7-13 by index).
    pub const COUNT: usize = 14;

    /// Red soldier. Raw value: 0.
    pub const RED_SOLDIER: Piece = Piece::new(PieceKind::Soldier, Color::Red);
    /// Red general. Raw value: 1.
    pub const RED_GENERAL: Piece = Piece::new(PieceKind::General, Color::Red);
    /// Red guard. Raw value: 2.
    pub const RED_GUARD: Piece = Piece::new(PieceKind::Guard, Color::Red);
    /// Red chariot. Raw value: 3.
    pub const RED_CHARIOT: Piece = Piece::new(PieceKind::Chariot, Color::Red);
    /// Red cannon. Raw value: 4.
    pub const RED_CANNON: Piece = Piece::new(PieceKind::Cannon, Color::Red);
    /// Red horse. Raw value: 5.
    pub const RED_HORSE: Piece = Piece::new(PieceKind::Horse, Color::Red);
    /// Red elephant. Raw value: 6.
    pub const RED_ELEPHANT: Piece = Piece::new(PieceKind::Elephant, Color::Red);

    /// Black soldier. Raw value: 8.
    pub const BLACK_SOLDIER: Piece = Piece::new(PieceKind::Soldier, Color::Black);
    /// Black general. Raw value: 9.
    pub const BLACK_GENERAL: Piece = Piece::new(PieceKind::General, Color::Black);
    /// Black guard. Raw value: 10.
    pub const BLACK_GUARD: Piece = Piece::new(PieceKind::Guard, Color::Black);
    /// Black chariot. Raw value: 11.
    pub const BLACK_CHARIOT: Piece = Piece::new(PieceKind::Chariot, Color::Black);
    /// Black cannon. Raw value: 12.
    pub const BLACK_CANNON: Piece = Piece::new(PieceKind::Cannon, Color::Black);
    /// Black horse. Raw value: 13.
    pub const BLACK_HORSE: Piece = Piece::new(PieceKind::Horse, Color::Black);
    /// Black elephant. Raw value: 14.
    pub const BLACK_ELEPHANT: Piece = Piece::new(PieceKind::Elephant, Color::Black);

    /// All 14 pieces: Red pieces (indices 0-6) followed by Black pieces (indices 7-13).
    pub const ALL: [Piece; 14] = [
        Self::RED_SOLDIER,
        Self::RED_GENERAL,
        Self::RED_GUARD,
        Self::RED_CHARIOT,
        Self::RED_CANNON,
        Self::RED_HORSE,
        Self::RED_ELEPHANT,
        Self::BLACK_SOLDIER,
        Self::BLACK_GENERAL,
        Self::BLACK_GUARD,
        Self::BLACK_CHARIOT,
        Self::BLACK_CANNON,
        Self::BLACK_HORSE,
        Self::BLACK_ELEPHANT,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 3 | (kind as u8))
    }

    /// Parse a notation character into a piece.
    ///
    /// Uppercase letters produce Red pieces; lowercase letters produce Black
    /// pieces. Returns `None` for characters that are not valid piece letters.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::Red
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Return the piece kind (the lower 3 bits).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::Soldier,
            1 => PieceKind::General,
            2 => PieceKind::Guard,
            3 => PieceKind::Chariot,
            4 => PieceKind::Cannon,
            5 => PieceKind::Horse,
            _ => PieceKind::Elephant,
        }
    }

    /// Return the color (bit 3: 0 = Red, 1 = Black).
    #[inline]
    pub const fn color(self) -> Color {
        match self.0 >> 3 {
            0 => Color::Red,
            _ => Color::Black,
        }
    }

    /// Return a contiguous index 0-13 for use in fixed-size arrays.
    ///
    /// Red pieces occupy indices 0-6, Black pieces occupy indices 7-13.
    /// The kind index within each color group matches [`PieceKind::index`].
    #[inline]
    pub const fn index(self) -> usize {
        let color_bit = (self.0 >> 3) as usize;
        let kind_bits = (self.0 & 0x07) as usize;
        color_bit * PieceKind::COUNT + kind_bits
    }

    /// Return the raw bit-packed byte (0-6 for Red, 8-14 for Black).
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Return the notation character for this piece.
    ///
    /// Uppercase for Red pieces, lowercase for Black pieces.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind().fen_char();
        match self.color() {
            Color::Red => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Return the traditional glyph for this piece (the two sides use
    /// different characters for the same kind).
    pub const fn chinese_char(self) -> char {
        match (self.color(), self.kind()) {
            (Color::Red, PieceKind::General) => '帥',
            (Color::Red, PieceKind::Guard) => '仕',
            (Color::Red, PieceKind::Elephant) => '相',
            (Color::Red, PieceKind::Horse) => '傌',
            (Color::Red, PieceKind::Chariot) => '俥',
            (Color::Red, PieceKind::Cannon) => '炮',
            (Color::Red, PieceKind::Soldier) => '兵',
            (Color::Black, PieceKind::General) => '將',
            (Color::Black, PieceKind::Guard) => '士',
            (Color::Black, PieceKind::Elephant) => '象',
            (Color::Black, PieceKind::Horse) => '馬',
            (Color::Black, PieceKind::Chariot) => '車',
            (Color::Black, PieceKind::Cannon) => '砲',
            (Color::Black, PieceKind::Soldier) => '卒',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::Red => 'R',
            Color::Black => 'B',
        };
        let kind_char = self.kind().fen_char().to_ascii_uppercase();
        write!(f, "{}{}", color_prefix, kind_char)
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn new_roundtrip() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), kind, "kind mismatch for {color:?} {kind:?}");
                assert_eq!(piece.color(), color, "color mismatch for {color:?} {kind:?}");
            }
        }
    }

    #[test]
    fn raw_values() {
        assert_eq!(Piece::RED_SOLDIER.raw(), 0);
        assert_eq!(Piece::RED_ELEPHANT.raw(), 6);
        assert_eq!(Piece::BLACK_SOLDIER.raw(), 8);
        assert_eq!(Piece::BLACK_ELEPHANT.raw(), 14);
    }

    #[test]
    fn index_contiguity() {
        let mut seen = [false; 14];
        for piece in Piece::ALL {
            let idx = piece.index();
            assert!(idx < 14, "index {idx} out of range for {piece:?}");
            assert!(!seen[idx], "duplicate index {idx} for {piece:?}");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&v| v), "not all indices 0-13 were covered");
    }

    #[test]
    fn fen_char_roundtrip() {
        for piece in Piece::ALL {
            let c = piece.fen_char();
            assert_eq!(
                Piece::from_fen_char(c),
                Some(piece),
                "roundtrip failed for {piece:?} (char '{c}')"
            );
        }
    }

    #[test]
    fn from_fen_char_case_sensitivity() {
        assert_eq!(Piece::from_fen_char('K'), Some(Piece::RED_GENERAL));
        assert_eq!(Piece::from_fen_char('k'), Some(Piece::BLACK_GENERAL));
        assert_eq!(Piece::from_fen_char('C'), Some(Piece::RED_CANNON));
        assert_eq!(Piece::from_fen_char('c'), Some(Piece::BLACK_CANNON));
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('9'), None);
    }

    #[test]
    fn chinese_chars_differ_by_side() {
        for kind in PieceKind::ALL {
            let red = Piece::new(kind, Color::Red).chinese_char();
            let black = Piece::new(kind, Color::Black).chinese_char();
            assert_ne!(red, black, "{kind:?} glyphs should differ by side");
        }
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Piece::RED_GENERAL), "RK");
        assert_eq!(format!("{:?}", Piece::BLACK_CANNON), "BC");
    }

    #[test]
    fn count_and_all() {
        assert_eq!(Piece::COUNT, 14);
        assert_eq!(Piece::ALL.len(), Piece::COUNT);
    }
}
