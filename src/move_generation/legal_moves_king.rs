use crate::game_state::board::Board;
use crate::game_state::chess_rules::OMNIGONALS;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::generate_step_moves;
use crate::moves::move_descriptions::Move;

/// One step in any direction. Castling and check safety are not considered.
pub fn generate_king_moves(board: &Board, source: Square, out: &mut Vec<Move>) {
    generate_step_moves(board, source, &OMNIGONALS, out);
}
