//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Scores are always from the perspective of the side to move.

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, board: &Board) -> i32;
}

/// Material weight per piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
            king: 5000,
        }
    }
}

impl PieceValues {
    #[inline]
    pub const fn value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }
}

/// Material balance, us minus them, read from the square table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialScorer {
    pub values: PieceValues,
}

impl MaterialScorer {
    pub const fn new(values: PieceValues) -> Self {
        Self { values }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        let side = board.side_to_move();
        let mut us = 0i32;
        let mut them = 0i32;

        for record in board.square_table().iter().filter_map(|state| state.occupant) {
            let value = self.values.value(record.kind);
            if record.color == side {
                us += value;
            } else {
                them += value;
            }
        }

        us - them
    }
}

impl Board {
    /// Material score for the side to move using the default piece values.
    pub fn score(&self) -> i32 {
        MaterialScorer::default().score(self)
    }
}
