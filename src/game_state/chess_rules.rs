//! Canonical chess-rule constants.
//!
//! Starting bitboards, movement directions and home ranks. Indices into
//! `STARTING_BITBOARDS` follow `piece_index`.

use crate::game_state::chess_types::{BitBoard, Color, Delta, BITBOARD_COUNT};

/// Standard starting arrangement, white kinds first then black.
pub const STARTING_BITBOARDS: [BitBoard; BITBOARD_COUNT] = [
    BitBoard(0x0000_0000_0000_FF00),
    BitBoard(0x0000_0000_0000_0042),
    BitBoard(0x0000_0000_0000_0024),
    BitBoard(0x0000_0000_0000_0081),
    BitBoard(0x0000_0000_0000_0008),
    BitBoard(0x0000_0000_0000_0010),
    BitBoard(0x00FF_0000_0000_0000),
    BitBoard(0x4200_0000_0000_0000),
    BitBoard(0x2400_0000_0000_0000),
    BitBoard(0x8100_0000_0000_0000),
    BitBoard(0x0800_0000_0000_0000),
    BitBoard(0x1000_0000_0000_0000),
];

pub const UP: Delta = Delta::new(1, 0);
pub const DOWN: Delta = Delta::new(-1, 0);
pub const LEFT: Delta = Delta::new(0, -1);
pub const RIGHT: Delta = Delta::new(0, 1);

pub const KNIGHT_DELTAS: [Delta; 8] = [
    Delta::new(2, 1),
    Delta::new(1, 2),
    Delta::new(-1, 2),
    Delta::new(-2, 1),
    Delta::new(-2, -1),
    Delta::new(-1, -2),
    Delta::new(1, -2),
    Delta::new(2, -1),
];

pub const DIAGONALS: [Delta; 4] = [
    Delta::new(1, 1),
    Delta::new(1, -1),
    Delta::new(-1, 1),
    Delta::new(-1, -1),
];

pub const ORTHOGONALS: [Delta; 4] = [UP, DOWN, LEFT, RIGHT];

pub const OMNIGONALS: [Delta; 8] = [
    Delta::new(1, 1),
    Delta::new(1, -1),
    Delta::new(-1, 1),
    Delta::new(-1, -1),
    UP,
    DOWN,
    LEFT,
    RIGHT,
];

/// Direction a pawn of `color` advances in.
#[inline]
pub const fn pawn_forward(color: Color) -> Delta {
    match color {
        Color::White => UP,
        Color::Black => DOWN,
    }
}

/// Rank a pawn of `color` starts on and may double push from.
#[inline]
pub const fn pawn_home_rank(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}
