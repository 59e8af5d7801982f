use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_forward, pawn_home_rank, LEFT, RIGHT};
use crate::game_state::chess_types::{rank_of, Square};
use crate::moves::move_descriptions::Move;

/// Diagonal captures, the single push, and the double push from the home rank.
///
/// Promotion and en passant are not generated.
pub fn generate_pawn_moves(board: &Board, source: Square, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let forward = pawn_forward(side);

    for side_step in [RIGHT, LEFT] {
        let mv = board.try_move(source, forward + side_step);
        if mv.is_attack() {
            out.push(mv);
        }
    }

    let push = board.try_move(source, forward);
    if !push.is_regular() {
        return;
    }
    out.push(push);

    if rank_of(source) == pawn_home_rank(side) {
        let double_push = board.try_move(source, forward * 2);
        if double_push.is_regular() {
            out.push(double_push);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::moves::move_descriptions::Move;

    fn pawn_moves(board: &Board, source: u8) -> Vec<Move> {
        let mut out = Vec::new();
        generate_pawn_moves(board, source, &mut out);
        out
    }

    #[test]
    fn white_pawn_on_home_rank_pushes_once_and_twice() {
        let mut board = Board::empty(Color::White);
        board.put_piece(12, Color::White, PieceKind::Pawn).unwrap();
        assert_eq!(
            pawn_moves(&board, 12),
            vec![
                Move::Regular { source: 12, dest: 20 },
                Move::Regular { source: 12, dest: 28 },
            ]
        );
    }

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let mut board = Board::empty(Color::White);
        board.put_piece(12, Color::White, PieceKind::Pawn).unwrap();
        board.put_piece(20, Color::Black, PieceKind::Knight).unwrap();
        assert!(pawn_moves(&board, 12).is_empty());
    }

    #[test]
    fn double_push_needs_empty_landing_square() {
        let mut board = Board::empty(Color::White);
        board.put_piece(12, Color::White, PieceKind::Pawn).unwrap();
        board.put_piece(28, Color::Black, PieceKind::Pawn).unwrap();
        assert_eq!(pawn_moves(&board, 12), vec![Move::Regular { source: 12, dest: 20 }]);
    }

    #[test]
    fn pawn_off_home_rank_pushes_once() {
        let mut board = Board::empty(Color::White);
        board.put_piece(20, Color::White, PieceKind::Pawn).unwrap();
        assert_eq!(pawn_moves(&board, 20), vec![Move::Regular { source: 20, dest: 28 }]);
    }

    #[test]
    fn diagonals_only_when_capturing() {
        let mut board = Board::empty(Color::Black);
        // black pawn d7, white rook c6, black knight e6
        board.put_piece(51, Color::Black, PieceKind::Pawn).unwrap();
        board.put_piece(42, Color::White, PieceKind::Rook).unwrap();
        board.put_piece(44, Color::Black, PieceKind::Knight).unwrap();

        let moves = pawn_moves(&board, 51);
        assert_eq!(
            moves,
            vec![
                Move::Attack {
                    source: 51,
                    dest: 42,
                    captured: PieceKind::Rook,
                },
                Move::Regular { source: 51, dest: 43 },
                Move::Regular { source: 51, dest: 35 },
            ]
        );
    }

    #[test]
    fn edge_file_pawn_does_not_wrap() {
        let mut board = Board::empty(Color::White);
        board.put_piece(15, Color::White, PieceKind::Pawn).unwrap();
        board.put_piece(24, Color::Black, PieceKind::Queen).unwrap();
        let moves = pawn_moves(&board, 15);
        assert!(moves.iter().all(|mv| !mv.is_attack()));
        assert_eq!(moves.len(), 2);
    }
}
