//! Move representation produced by move generation and consumed by
//! `Board::update` / `Board::undo`.

use std::fmt;

use crate::game_state::chess_types::{file_of, rank_of, PieceKind, Square};

/// Outcome of trying to step a piece from one square to another.
///
/// `Invalid` is the normal "cannot go there" branch (off the board, or onto a
/// friendly piece). It is filtered out by the generators and must never be
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Invalid,
    Regular {
        source: Square,
        dest: Square,
    },
    Attack {
        source: Square,
        dest: Square,
        captured: PieceKind,
    },
}

impl Move {
    #[inline]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Move::Invalid)
    }

    #[inline]
    pub const fn is_regular(&self) -> bool {
        matches!(self, Move::Regular { .. })
    }

    #[inline]
    pub const fn is_attack(&self) -> bool {
        matches!(self, Move::Attack { .. })
    }

    #[inline]
    pub const fn source(&self) -> Option<Square> {
        match self {
            Move::Invalid => None,
            Move::Regular { source, .. } | Move::Attack { source, .. } => Some(*source),
        }
    }

    #[inline]
    pub const fn dest(&self) -> Option<Square> {
        match self {
            Move::Invalid => None,
            Move::Regular { dest, .. } | Move::Attack { dest, .. } => Some(*dest),
        }
    }

    #[inline]
    pub const fn captured(&self) -> Option<PieceKind> {
        match self {
            Move::Attack { captured, .. } => Some(*captured),
            _ => None,
        }
    }
}

/// Coordinate notation such as `e2e4`, with `x` between squares for captures.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Invalid => f.write_str("(invalid)"),
            Move::Regular { source, dest } => {
                write_square(f, *source)?;
                write_square(f, *dest)
            }
            Move::Attack { source, dest, .. } => {
                write_square(f, *source)?;
                f.write_str("x")?;
                write_square(f, *dest)
            }
        }
    }
}

fn write_square(f: &mut fmt::Formatter<'_>, square: Square) -> fmt::Result {
    let file = char::from(b'a' + file_of(square) as u8);
    let rank = char::from(b'1' + rank_of(square) as u8);
    write!(f, "{file}{rank}")
}
