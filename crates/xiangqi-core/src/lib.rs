//! Core Xiangqi rules engine: board representation, per-piece legal move
//! generation, and move application.

mod apply;
mod behavior;
mod board;
mod color;
mod coord;
mod error;
mod fen;
mod movegen;
mod moves;
mod piece;
mod piece_kind;

pub use behavior::{Behavior, BehaviorTable, MoveRule, RawGenerator};
pub use board::Board;
pub use color::Color;
pub use coord::Coord;
pub use error::{BoardError, FenError, MoveError};
pub use fen::STARTING_FEN;
pub use movegen::{enumerate_legal_moves, legal_destinations, pick_uniform_random_move};
pub use moves::Move;
pub use piece::Piece;
pub use piece_kind::PieceKind;
