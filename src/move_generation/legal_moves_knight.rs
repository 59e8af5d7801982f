use crate::game_state::board::Board;
use crate::game_state::chess_rules::KNIGHT_DELTAS;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::generate_step_moves;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(board: &Board, source: Square, out: &mut Vec<Move>) {
    generate_step_moves(board, source, &KNIGHT_DELTAS, out);
}
