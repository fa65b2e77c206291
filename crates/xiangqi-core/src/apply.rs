//! Move application via copy-make.

use crate::board::Board;
use crate::error::MoveError;
use crate::moves::Move;

impl Board {
    /// Apply a move and return the resulting board; `self` is untouched.
    ///
    /// Capture-by-overwrite: whatever stood on the destination is discarded
    /// with no record kept. Legality is the enumerator's responsibility —
    /// the only precondition checked here is that the source cell holds a
    /// piece.
    ///
    /// # Errors
    ///
    /// [`MoveError::EmptySource`] if the source cell is empty.
    pub fn apply_move(&self, mv: Move) -> Result<Board, MoveError> {
        let piece = self
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySource { from: mv.from })?;

        // Clear the source before writing the destination, so the degenerate
        // from == to request leaves the piece in place instead of erasing it.
        let mut next = *self;
        next.set(mv.from, None);
        next.set(mv.to, Some(piece));
        Ok(next)
    }
}
