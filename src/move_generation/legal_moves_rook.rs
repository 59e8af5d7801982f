use crate::game_state::board::Board;
use crate::game_state::chess_rules::ORTHOGONALS;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::move_descriptions::Move;

pub fn generate_rook_moves(board: &Board, source: Square, out: &mut Vec<Move>) {
    generate_sliding_moves(board, source, &ORTHOGONALS, out);
}
