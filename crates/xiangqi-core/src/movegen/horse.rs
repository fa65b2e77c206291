//! Horse movement: the eight L-shaped leaps, each blocked by an occupied
//! "leg" cell adjacent to the origin along the move's longer axis.

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;

/// Each leap paired with its leg cell offset.
const LEAPS: [((i8, i8), (i8, i8)); 8] = [
    ((-2, -1), (-1, 0)),
    ((-2, 1), (-1, 0)),
    ((2, -1), (1, 0)),
    ((2, 1), (1, 0)),
    ((-1, -2), (0, -1)),
    ((1, -2), (0, -1)),
    ((-1, 2), (0, 1)),
    ((1, 2), (0, 1)),
];

/// Raw horse candidates. The leg check happens here, per offset; the
/// destination checks are left to the shared pipeline. A leg that falls off
/// the grid implies an off-grid destination, so such leaps are dropped
/// outright.
pub(crate) fn raw_moves(board: &Board, _color: Color, from: Coord) -> Vec<(i8, i8)> {
    LEAPS
        .iter()
        .filter_map(|&((dr, dc), (leg_r, leg_c))| {
            let leg = from.offset(leg_r, leg_c)?;
            board
                .is_empty(leg)
                .then_some((from.row() + dr, from.col() + dc))
        })
        .collect()
}
