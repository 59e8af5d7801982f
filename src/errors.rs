//! Error types for position construction and verification.
//!
//! Move generation and application have no recoverable failures; these errors
//! only arise when a position is assembled from caller-supplied data or when
//! the two board representations are checked against each other.

use thiserror::Error;

use crate::game_state::chess_types::Square;
use crate::game_state::square_state::PieceRecord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Two bitboards claim the same square.
    #[error("more than one piece bitboard has square {square} set")]
    OverlappingPieces { square: Square },

    /// Square index outside `0..64`.
    #[error("square index {square} is off the board (must be 0-63)")]
    SquareOutOfRange { square: Square },

    /// Attempted to place a piece on an occupied square.
    #[error("square {square} is already occupied by {occupant:?}")]
    SquareOccupied {
        square: Square,
        occupant: PieceRecord,
    },

    /// The square table disagrees with the bitboards.
    #[error("square table holds {found:?} on square {square} but bitboards say {expected:?}")]
    SquareTableMismatch {
        square: Square,
        expected: Option<PieceRecord>,
        found: Option<PieceRecord>,
    },
}

pub type BoardResult<T> = Result<T, BoardError>;
