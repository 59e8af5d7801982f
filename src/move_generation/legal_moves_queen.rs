use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

pub fn generate_queen_moves(board: &Board, source: Square, out: &mut Vec<Move>) {
    generate_bishop_moves(board, source, out);
    generate_rook_moves(board, source, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn queen_on_d4_combines_bishop_and_rook_rays() {
        let mut board = Board::empty(Color::White);
        board.put_piece(27, Color::White, PieceKind::Queen).unwrap();
        let mut out = Vec::new();
        generate_queen_moves(&board, 27, &mut out);
        assert_eq!(out.len(), 27);
    }

    #[test]
    fn queen_in_start_position_is_boxed_in() {
        let board = Board::new();
        let mut out = Vec::new();
        generate_queen_moves(&board, 3, &mut out);
        assert!(out.is_empty());
    }
}
