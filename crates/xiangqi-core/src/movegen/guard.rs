//! Guard movement: one diagonal step, never leaving the palace.

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::movegen::in_palace;

/// Raw guard candidates: the four diagonal single steps, already rechecked
/// against the palace bounds here. The shared palace rule runs again as the
/// pipeline's stage 3; a guard step can never pass one check and fail the
/// other.
pub(crate) fn raw_moves(_board: &Board, color: Color, from: Coord) -> Vec<(i8, i8)> {
    const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

    let (row, col) = (from.row(), from.col());
    DIAGONALS
        .iter()
        .map(|&(dr, dc)| (row + dr, col + dc))
        .filter(|&(r, c)| in_palace(color, r, c))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::coord::Coord;
    use crate::movegen::legal_destinations;
    use crate::piece::Piece;

    fn at(row: i8, col: i8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn lone(piece: Piece, row: i8, col: i8) -> Board {
        let mut board = Board::empty();
        board.set(at(row, col), Some(piece));
        board
    }

    #[test]
    fn guard_on_palace_center_reaches_all_corners() {
        let board = lone(Piece::RED_GUARD, 1, 4);
        assert_eq!(
            legal_destinations(&board, at(1, 4)),
            [at(0, 3), at(0, 5), at(2, 3), at(2, 5)].into_iter().collect()
        );
    }

    #[test]
    fn guard_on_palace_corner_only_returns_to_center() {
        let board = lone(Piece::RED_GUARD, 0, 3);
        assert_eq!(
            legal_destinations(&board, at(0, 3)),
            [at(1, 4)].into_iter().collect()
        );
    }

    #[test]
    fn black_guard_stays_in_black_palace() {
        let board = lone(Piece::BLACK_GUARD, 9, 5);
        assert_eq!(
            legal_destinations(&board, at(9, 5)),
            [at(8, 4)].into_iter().collect()
        );
    }

    #[test]
    fn guard_captures_enemy_on_diagonal() {
        let mut board = lone(Piece::RED_GUARD, 1, 4);
        board.set(at(2, 5), Some(Piece::BLACK_HORSE));
        board.set(at(2, 3), Some(Piece::RED_HORSE));
        let dests = legal_destinations(&board, at(1, 4));
        assert!(dests.contains(&at(2, 5)));
        assert!(!dests.contains(&at(2, 3)));
    }
}
