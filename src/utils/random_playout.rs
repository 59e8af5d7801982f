//! Seeded random playouts over pseudo-legal moves.
//!
//! Picks uniformly among `possible_moves` each ply. Used for diagnostics and
//! to exercise long update/undo sequences in tests.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::move_stack::MoveStack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayoutConfig {
    pub max_plies: usize,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutEnd {
    PlyLimit,
    NoMoves,
    KingCaptured { winner: Color },
}

/// Play random moves onto `stack` until the ply limit, a position with no
/// moves, or a king capture. Returns how the playout ended; the moves played
/// stay on the stack.
pub fn random_playout(stack: &mut MoveStack, config: &PlayoutConfig) -> PlayoutEnd {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut end = PlayoutEnd::PlyLimit;

    for _ in 0..config.max_plies {
        let moves = stack.board().possible_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            end = PlayoutEnd::NoMoves;
            break;
        };

        let mover = stack.board().side_to_move();
        stack.push(mv);
        if mv.captured() == Some(PieceKind::King) {
            end = PlayoutEnd::KingCaptured { winner: mover };
            break;
        }
    }

    debug!("playout seed {} ended {:?} after {} plies", config.seed, end, stack.len());
    end
}
