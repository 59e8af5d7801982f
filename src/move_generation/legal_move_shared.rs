use crate::game_state::board::Board;
use crate::game_state::chess_types::{Delta, Square};
use crate::moves::move_descriptions::Move;

/// Try each delta once from `source`, keeping every valid result.
pub fn generate_step_moves(board: &Board, source: Square, deltas: &[Delta], out: &mut Vec<Move>) {
    for &delta in deltas {
        let mv = board.try_move(source, delta);
        if mv.is_valid() {
            out.push(mv);
        }
    }
}

/// Walk each ray outwards from `source` until it leaves the board, meets a
/// friendly piece, or captures.
pub fn generate_sliding_moves(
    board: &Board,
    source: Square,
    directions: &[Delta],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        let mut offset = direction;
        loop {
            let mv = board.try_move(source, offset);
            if mv.is_valid() {
                out.push(mv);
            }
            if !mv.is_regular() {
                break;
            }
            offset += direction;
        }
    }
}
