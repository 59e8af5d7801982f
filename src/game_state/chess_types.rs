//! Primitive board vocabulary shared by every other module.
//!
//! Squares are `0..64` in row-major order with `0 == a1`, `7 == h1` and
//! `63 == h8`. Rank grows towards black's side of the board.

use std::fmt;
use std::ops::{Add, AddAssign, BitAnd, BitOr, BitOrAssign, Mul};

/// Board square index (`0..=63`).
pub type Square = u8;

/// Squares per rank and ranks per board.
pub const BOARD_WIDTH: i8 = 8;
pub const SQUARE_COUNT: usize = 64;
pub const PIECE_KIND_COUNT: usize = 6;
/// One bitboard per (color, piece kind) pair.
pub const BITBOARD_COUNT: usize = 2 * PIECE_KIND_COUNT;

#[inline]
pub const fn rank_of(square: Square) -> i8 {
    (square / 8) as i8
}

#[inline]
pub const fn file_of(square: Square) -> i8 {
    (square % 8) as i8
}

/// Square at `(rank, file)`, or `None` when either coordinate is off the board.
#[inline]
pub const fn square_at(rank: i8, file: i8) -> Option<Square> {
    if rank < 0 || rank >= BOARD_WIDTH || file < 0 || file >= BOARD_WIDTH {
        return None;
    }
    Some((rank * BOARD_WIDTH + file) as Square)
}

/// Side to move, and the owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Piece kind (color is carried separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Every kind in the priority order used when deriving the square table.
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// Bitboard slot for a (color, kind) pair: white kinds occupy `0..6`, black `6..12`.
#[inline]
pub const fn piece_index(color: Color, kind: PieceKind) -> usize {
    kind.index()
        + match color {
            Color::White => 0,
            Color::Black => PIECE_KIND_COUNT,
        }
}

/// A step on the board expressed as (rank offset, file offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub rank: i8,
    pub file: i8,
}

impl Delta {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }
}

impl Add for Delta {
    type Output = Delta;

    #[inline]
    fn add(self, rhs: Delta) -> Delta {
        Delta::new(self.rank + rhs.rank, self.file + rhs.file)
    }
}

impl AddAssign for Delta {
    #[inline]
    fn add_assign(&mut self, rhs: Delta) {
        self.rank += rhs.rank;
        self.file += rhs.file;
    }
}

impl Mul<i8> for Delta {
    type Output = Delta;

    #[inline]
    fn mul(self, rhs: i8) -> Delta {
        Delta::new(self.rank * rhs, self.file * rhs)
    }
}

/// One bit per square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BitBoard(pub u64);

impl BitBoard {
    pub const EMPTY: BitBoard = BitBoard(0);

    #[inline]
    pub const fn from_square(square: Square) -> Self {
        BitBoard(1u64 << square)
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        (self.0 >> square) & 1 != 0
    }

    #[inline]
    pub fn set(&mut self, square: Square) {
        self.0 |= 1u64 << square;
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.0 &= !(1u64 << square);
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Occupied squares in ascending order.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let square = bits.trailing_zeros() as Square;
            bits &= bits - 1;
            Some(square)
        })
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn bitor(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 | rhs.0)
    }
}

impl BitOrAssign for BitBoard {
    #[inline]
    fn bitor_assign(&mut self, rhs: BitBoard) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn bitand(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 & rhs.0)
    }
}
