//! Straight-line sliders: Chariot and Cannon.
//!
//! Both share the same raw candidate set (every cell on the origin's row or
//! column) and the same obstruction-counting rule, parameterized by
//! `allow_jump`: the Chariot requires a clear line, the Cannon additionally
//! allows a capture over exactly one screen.

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;

/// Raw slider candidates: every cell at distance 1..=9 in the four
/// orthogonal directions. Off-grid entries are discarded by the bounds
/// filter.
pub(crate) fn raw_line_moves(_board: &Board, _color: Color, from: Coord) -> Vec<(i8, i8)> {
    let (row, col) = (from.row(), from.col());
    let mut moves = Vec::with_capacity(36);
    for i in 1..=9 {
        moves.push((row + i, col));
        moves.push((row - i, col));
        moves.push((row, col + i));
        moves.push((row, col - i));
    }
    moves
}

/// Chariot stage-3 rule: straight line, no intervening piece of either color.
pub(crate) fn chariot_rule(board: &Board, _color: Color, from: Coord, to: Coord) -> bool {
    line_rule(board, from, to, false)
}

/// Cannon stage-3 rule: a quiet move needs a clear line and an empty
/// destination; a capture needs exactly one screen of either color.
pub(crate) fn cannon_rule(board: &Board, _color: Color, from: Coord, to: Coord) -> bool {
    line_rule(board, from, to, true)
}

fn line_rule(board: &Board, from: Coord, to: Coord, allow_jump: bool) -> bool {
    let dr = to.row() - from.row();
    let dc = to.col() - from.col();
    // Strictly horizontal or vertical; also rejects from == to.
    if (dr != 0) == (dc != 0) {
        return false;
    }

    let obstructions = count_between(board, from, to);
    let capture = !board.is_empty(to);
    if allow_jump {
        if capture {
            obstructions == 1
        } else {
            obstructions == 0
        }
    } else {
        obstructions == 0
    }
}

/// Count occupied cells strictly between two collinear coordinates,
/// exclusive of both endpoints.
fn count_between(board: &Board, from: Coord, to: Coord) -> u32 {
    let dr = (to.row() - from.row()).signum();
    let dc = (to.col() - from.col()).signum();
    let mut count = 0;
    let mut at = from;
    loop {
        at = match at.offset(dr, dc) {
            Some(next) => next,
            // Collinear in-bounds endpoints always reach `to` first.
            None => break,
        };
        if at == to {
            break;
        }
        if !board.is_empty(at) {
            count += 1;
        }
    }
    count
}
