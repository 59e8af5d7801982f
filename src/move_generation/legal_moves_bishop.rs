use crate::game_state::board::Board;
use crate::game_state::chess_rules::DIAGONALS;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(board: &Board, source: Square, out: &mut Vec<Move>) {
    generate_sliding_moves(board, source, &DIAGONALS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn bishop_on_d4_sees_thirteen_squares_on_empty_board() {
        let mut board = Board::empty(Color::Black);
        board.put_piece(27, Color::Black, PieceKind::Bishop).unwrap();
        let mut out = Vec::new();
        generate_bishop_moves(&board, 27, &mut out);
        assert_eq!(out.len(), 13);
    }
}
