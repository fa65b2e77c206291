//! Legal move generation: per-piece raw shape generators, the shared
//! three-stage legality filter pipeline, and the full-board enumerator.
//!
//! Every raw candidate list passes through the same ordered filters:
//! bounds, then self-occupancy, then the piece's optional stage-3 rule.
//! Only the raw generator and the stage-3 rule vary by piece kind.

pub(crate) mod elephant;
pub(crate) mod general;
pub(crate) mod guard;
pub(crate) mod horse;
pub(crate) mod sliders;
pub(crate) mod soldier;

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, trace};

use crate::behavior::BehaviorTable;
use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::moves::Move;

/// Palace columns, shared by both sides.
const PALACE_COLS: std::ops::RangeInclusive<i8> = 3..=5;

/// Return `true` if raw (row, col) lies inside `color`'s palace.
#[inline]
pub(crate) fn in_palace(color: Color, row: i8, col: i8) -> bool {
    PALACE_COLS.contains(&col) && color.palace_rows().contains(&row)
}

/// Stage-3 rule shared by General and Guard: the destination must stay
/// inside the moving side's own palace.
pub(crate) fn palace_rule(_board: &Board, color: Color, _from: Coord, to: Coord) -> bool {
    in_palace(color, to.row(), to.col())
}

/// Return every legal destination for the piece standing on `from`.
///
/// An empty cell, or a cell whose token has no registered behavior, yields
/// the empty set rather than an error.
pub fn legal_destinations(board: &Board, from: Coord) -> BTreeSet<Coord> {
    let Some(piece) = board.piece_at(from) else {
        return BTreeSet::new();
    };
    let Some(behavior) = BehaviorTable::global().lookup(piece) else {
        debug!(piece = ?piece, at = %from, "no behavior registered for token, skipping");
        return BTreeSet::new();
    };

    let color = piece.color();
    (behavior.raw())(board, color, from)
        .into_iter()
        // Stage 1: discard candidates outside the 10×9 grid.
        .filter_map(|(row, col)| Coord::new(row, col))
        // Stage 2: a side cannot capture its own piece.
        .filter(|&to| !board.is_color(to, color))
        // Stage 3: the piece-specific rule, if the behavior carries one.
        .filter(|&to| {
            behavior
                .rule()
                .is_none_or(|rule| rule(board, color, from, to))
        })
        .collect()
}

/// Enumerate every legal move for `side`, deduplicated by the full
/// (from, to) tuple.
///
/// Moves that would leave the mover's own general capturable are *not*
/// excluded, and the flying-general rule is not applied: raw piece legality
/// only. A game-control layer above owns any stronger notion of legality.
/// Re-invocation on an unchanged board returns the identical set.
pub fn enumerate_legal_moves(board: &Board, side: Color) -> BTreeSet<Move> {
    let mut moves = BTreeSet::new();
    for (from, _) in board.pieces_of(side) {
        for to in legal_destinations(board, from) {
            moves.insert(Move::new(from, to));
        }
    }
    trace!(side = %side, count = moves.len(), "enumerated legal moves");
    moves
}

/// Draw one of `side`'s legal moves uniformly at random, or `None` if the
/// side has no legal move. The random source is supplied by the caller so
/// tests can make the draw deterministic.
pub fn pick_uniform_random_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    rng: &mut R,
) -> Option<Move> {
    let moves: Vec<Move> = enumerate_legal_moves(board, side).into_iter().collect();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}
