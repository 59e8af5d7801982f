//! Node counting over pseudo-legal move trees.
//!
//! Used as a move-generation regression check and as a benchmark workload.

use log::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub king_captures: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.king_captures += rhs.king_captures;
    }
}

/// Count leaf nodes `depth` plies below `board`. The board is restored
/// before returning.
pub fn perft(board: &mut Board, depth: u8) -> PerftCounts {
    let counts = perft_recurse(board, depth, None);
    debug!("perft depth {depth}: {counts:?}");
    counts
}

/// Per-root-move breakdown of `perft`, in generation order.
pub fn perft_divide(board: &mut Board, depth: u8) -> Vec<(Move, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }
    board
        .possible_moves()
        .into_iter()
        .map(|mv| {
            board.update(mv);
            let counts = perft_recurse(board, depth - 1, Some(mv));
            board.undo(mv);
            (mv, counts)
        })
        .collect()
}

fn perft_recurse(board: &mut Board, depth: u8, last: Option<Move>) -> PerftCounts {
    if depth == 0 {
        let mut leaf = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        if let Some(captured) = last.and_then(|mv| mv.captured()) {
            leaf.captures = 1;
            if captured == PieceKind::King {
                leaf.king_captures = 1;
            }
        }
        return leaf;
    }

    let mut total = PerftCounts::default();
    for mv in board.possible_moves() {
        board.update(mv);
        total.merge(perft_recurse(board, depth - 1, Some(mv)));
        board.undo(mv);
    }
    total
}
