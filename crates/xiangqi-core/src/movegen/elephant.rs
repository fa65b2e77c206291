//! Elephant movement: two-cell diagonal leaps whose midpoint (the elephant's
//! "eye") must be empty and must stay on the piece's own side of the river.

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;

const LEAPS: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

/// Raw elephant candidates. Checking the midpoint row rather than the
/// destination row is what keeps elephants on their own half: a midpoint
/// across the river is rejected even when the destination would be in
/// bounds.
pub(crate) fn raw_moves(board: &Board, color: Color, from: Coord) -> Vec<(i8, i8)> {
    LEAPS
        .iter()
        .filter_map(|&(dr, dc)| {
            let eye = from.offset(dr / 2, dc / 2)?;
            if !board.is_empty(eye) || color.has_crossed_river(eye.row()) {
                return None;
            }
            Some((from.row() + dr, from.col() + dc))
        })
        .collect()
}
