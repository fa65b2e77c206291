//! General movement: one orthogonal step, confined to the palace by the
//! shared stage-3 rule.

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;

/// Raw general candidates: the four orthogonal single steps. Palace
/// confinement is applied by [`palace_rule`](crate::movegen::palace_rule).
pub(crate) fn raw_moves(_board: &Board, _color: Color, from: Coord) -> Vec<(i8, i8)> {
    let (row, col) = (from.row(), from.col());
    vec![
        (row - 1, col),
        (row + 1, col),
        (row, col - 1),
        (row, col + 1),
    ]
}
