//! Soldier movement: one step toward the enemy, plus sideways steps once
//! across the river.

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;

/// Raw soldier candidates. Before the river only the forward step is
/// offered; after crossing, both sideways steps join it. Soldiers never
/// retreat.
pub(crate) fn raw_moves(_board: &Board, color: Color, from: Coord) -> Vec<(i8, i8)> {
    let (row, col) = (from.row(), from.col());
    let forward = (row + color.forward(), col);
    if color.has_crossed_river(row) {
        vec![forward, (row, col + 1), (row, col - 1)]
    } else {
        vec![forward]
    }
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
    fn red_soldier_before_river_only_advances() {
        let board = lone(Piece::RED_SOLDIER, 3, 4);
        let dests = legal_destinations(&board, at(3, 4));
        assert_eq!(dests, [at(4, 4)].into_iter().collect());
    }

    #[test]
    fn red_soldier_after_river_gains_sideways() {
        let board = lone(Piece::RED_SOLDIER, 5, 4);
        let dests = legal_destinations(&board, at(5, 4));
        assert_eq!(dests, [at(6, 4), at(5, 3), at(5, 5)].into_iter().collect());
    }

    #[test]
    fn black_soldier_mirrors() {
        let board = lone(Piece::BLACK_SOLDIER, 6, 0);
        assert_eq!(
            legal_destinations(&board, at(6, 0)),
            [at(5, 0)].into_iter().collect()
        );

        let board = lone(Piece::BLACK_SOLDIER, 4, 0);
        assert_eq!(
            legal_destinations(&board, at(4, 0)),
            [at(3, 0), at(4, 1)].into_iter().collect()
        );
    }

    #[test]
    fn soldier_on_last_rank_can_only_shuffle_sideways() {
        let board = lone(Piece::RED_SOLDIER, 9, 4);
        assert_eq!(
            legal_destinations(&board, at(9, 4)),
            [at(9, 3), at(9, 5)].into_iter().collect()
        );
    }

    #[test]
    fn soldier_blocked_by_friend_captures_enemy() {
        let mut board = lone(Piece::RED_SOLDIER, 3, 4);
        board.set(at(4, 4), Some(Piece::RED_HORSE));
        assert!(legal_destinations(&board, at(3, 4)).is_empty());

        board.set(at(4, 4), Some(Piece::BLACK_HORSE));
        assert_eq!(
            legal_destinations(&board, at(3, 4)),
            [at(4, 4)].into_iter().collect()
        );
    }
}
