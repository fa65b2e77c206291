//! The piece behavior table: a closed registry mapping each of the fourteen
//! (color, kind) identities to its raw-candidate generator and optional
//! piece-specific move rule.
//!
//! The table is built once, before any board is processed, and is read-only
//! afterward, so concurrent queries are safe by construction.

use std::sync::OnceLock;

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::movegen;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Produces raw candidate destinations as absolute (row, col) pairs, shape
/// only: candidates may be off the grid or land on friendly pieces. The
/// filter pipeline removes those.
pub type RawGenerator = fn(&Board, Color, Coord) -> Vec<(i8, i8)>;

/// Stage-3 predicate of the filter pipeline: arbitrary additional rule over
/// (board, color, from, to).
pub type MoveRule = fn(&Board, Color, Coord, Coord) -> bool;

/// The registered behavior of one piece identity.
#[derive(Clone, Copy)]
pub struct Behavior {
    piece: Piece,
    raw: RawGenerator,
    rule: Option<MoveRule>,
}

impl Behavior {
    /// The piece identity this behavior was registered for.
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Return `true` if the given cell holds exactly this piece identity.
    #[inline]
    pub fn matches(&self, board: &Board, at: Coord) -> bool {
        board.piece_at(at) == Some(self.piece)
    }

    /// The raw-candidate generator.
    #[inline]
    pub fn raw(&self) -> RawGenerator {
        self.raw
    }

    /// The optional piece-specific rule applied as the pipeline's last stage.
    #[inline]
    pub fn rule(&self) -> Option<MoveRule> {
        self.rule
    }
}

/// The closed behavior registry, indexed by [`Piece::index`].
pub struct BehaviorTable {
    entries: [Option<Behavior>; Piece::COUNT],
}

impl BehaviorTable {
    /// Return the process-wide table, building it on first use.
    pub fn global() -> &'static BehaviorTable {
        static TABLE: OnceLock<BehaviorTable> = OnceLock::new();
        TABLE.get_or_init(BehaviorTable::build)
    }

    /// Resolve the behavior for a piece. A miss means "no behavior": callers
    /// skip such cells rather than failing.
    #[inline]
    pub fn lookup(&self, piece: Piece) -> Option<&Behavior> {
        self.entries[piece.index()].as_ref()
    }

    fn build() -> BehaviorTable {
        let mut table = BehaviorTable {
            entries: [None; Piece::COUNT],
        };
        for color in Color::ALL {
            table.register(color, PieceKind::Soldier, movegen::soldier::raw_moves, None);
            table.register(
                color,
                PieceKind::General,
                movegen::general::raw_moves,
                Some(movegen::palace_rule),
            );
            table.register(
                color,
                PieceKind::Guard,
                movegen::guard::raw_moves,
                Some(movegen::palace_rule),
            );
            table.register(
                color,
                PieceKind::Chariot,
                movegen::sliders::raw_line_moves,
                Some(movegen::sliders::chariot_rule),
            );
            table.register(
                color,
                PieceKind::Cannon,
                movegen::sliders::raw_line_moves,
                Some(movegen::sliders::cannon_rule),
            );
            table.register(color, PieceKind::Horse, movegen::horse::raw_moves, None);
            table.register(
                color,
                PieceKind::Elephant,
                movegen::elephant::raw_moves,
                None,
            );
        }
        table
    }

    fn register(&mut self, color: Color, kind: PieceKind, raw: RawGenerator, rule: Option<MoveRule>) {
        let piece = Piece::new(kind, color);
        debug_assert!(
            self.entries[piece.index()].is_none(),
            "behavior registered twice for {piece:?}"
        );
        self.entries[piece.index()] = Some(Behavior { piece, raw, rule });
    }
}
