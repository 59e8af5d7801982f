//! Pseudo-legal move enumeration for the side to move.
//!
//! Every occupied square of the side to move is dispatched on its piece kind
//! to the matching generator. Moves that leave the mover's own king attacked
//! are still produced.

use log::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Append every move of a `kind` piece standing on `source`.
pub fn generate_piece_moves(board: &Board, kind: PieceKind, source: Square, out: &mut Vec<Move>) {
    match kind {
        PieceKind::Pawn => generate_pawn_moves(board, source, out),
        PieceKind::Knight => generate_knight_moves(board, source, out),
        PieceKind::Bishop => generate_bishop_moves(board, source, out),
        PieceKind::Rook => generate_rook_moves(board, source, out),
        PieceKind::Queen => generate_queen_moves(board, source, out),
        PieceKind::King => generate_king_moves(board, source, out),
    }
}

impl Board {
    /// All pseudo-legal moves for the side to move, in no meaningful order.
    pub fn possible_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.possible_moves_into(&mut moves);
        moves
    }

    /// Same as `possible_moves`, appending into a caller-owned buffer.
    pub fn possible_moves_into(&self, out: &mut Vec<Move>) {
        let start = out.len();
        for state in &self.square_table {
            let Some(record) = state.occupant else {
                continue;
            };
            if record.color != self.side_to_move {
                continue;
            }
            generate_piece_moves(self, record.kind, state.square, out);
        }
        debug!(
            "{} possible moves for {}",
            out.len() - start,
            self.side_to_move
        );
    }
}
