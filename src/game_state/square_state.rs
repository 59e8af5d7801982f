use crate::game_state::chess_types::{Color, PieceKind, Square};

/// A colored piece as it sits on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRecord {
    pub color: Color,
    pub kind: PieceKind,
}

impl PieceRecord {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Occupancy record for one square of the square table.
///
/// `occupant == None` is the empty flag; otherwise it names the actual piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareState {
    pub square: Square,
    pub occupant: Option<PieceRecord>,
}

impl SquareState {
    #[inline]
    pub const fn empty(square: Square) -> Self {
        Self {
            square,
            occupant: None,
        }
    }

    #[inline]
    pub const fn occupied(square: Square, color: Color, kind: PieceKind) -> Self {
        Self {
            square,
            occupant: Some(PieceRecord::new(color, kind)),
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.occupant.map(|record| record.color)
    }
}
