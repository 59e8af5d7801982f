//! In-place move application and single-level undo.
//!
//! Both the square table and the bitboards are updated, so a board stays
//! consistent across any correctly sequenced `update`/`undo` pair. Deeper
//! history belongs to the caller (see `MoveStack`).

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::square_state::PieceRecord;
use crate::moves::move_descriptions::Move;

impl Board {
    /// Move the piece on the source square to the destination, capturing
    /// whatever stood there, and pass the turn.
    ///
    /// `mv` must not be `Move::Invalid`; such a move is ignored in release
    /// builds.
    pub fn update(&mut self, mv: Move) {
        debug_assert!(mv.is_valid(), "cannot apply an invalid move");
        let (Some(source), Some(dest)) = (mv.source(), mv.dest()) else {
            return;
        };
        trace!("update {mv} by {}", self.side_to_move);

        let moving = self.vacate(source);
        debug_assert!(moving.is_some(), "no piece on source square {source}");
        if let Some(record) = moving {
            self.place(dest, record);
        }

        self.side_to_move = self.side_to_move.toggle();
    }

    /// Revert `mv`, which must be the move most recently passed to `update`.
    ///
    /// A captured piece is restored with the color of the side currently to
    /// move, and the returned piece takes the color of the side regaining the
    /// move.
    pub fn undo(&mut self, mv: Move) {
        debug_assert!(mv.is_valid(), "cannot undo an invalid move");
        let (Some(source), Some(dest)) = (mv.source(), mv.dest()) else {
            return;
        };
        trace!("undo {mv}");

        let moved = self.vacate(dest);
        debug_assert!(moved.is_some(), "no piece on destination square {dest}");

        if let Move::Attack { captured, .. } = mv {
            self.place(dest, PieceRecord::new(self.side_to_move, captured));
        }

        self.side_to_move = self.side_to_move.toggle();
        if let Some(record) = moved {
            self.place(source, PieceRecord::new(self.side_to_move, record.kind));
        }
    }
}
