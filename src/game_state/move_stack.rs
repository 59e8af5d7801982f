//! Caller-side history for multi-ply make/unmake.
//!
//! `Board::undo` only reverts the most recent move. `MoveStack` owns a board
//! together with the moves applied to it so any number of plies can be
//! unwound in LIFO order.

use crate::game_state::board::Board;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone)]
pub struct MoveStack {
    board: Board,
    history: Vec<Move>,
}

impl MoveStack {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Moves applied so far, oldest first.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn push(&mut self, mv: Move) {
        self.board.update(mv);
        self.history.push(mv);
    }

    /// Revert the most recent move, returning it.
    pub fn pop(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.board.undo(mv);
        Some(mv)
    }

    /// Revert every recorded move.
    pub fn unwind(&mut self) {
        while self.pop().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::MoveStack;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn pops_in_reverse_order() {
        let mut stack = MoveStack::new(Board::new());
        let first = Move::Regular { source: 12, dest: 28 };
        let second = Move::Regular { source: 51, dest: 35 };
        stack.push(first);
        stack.push(second);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.board().side_to_move(), Color::White);

        assert_eq!(stack.pop(), Some(second));
        assert_eq!(stack.board().side_to_move(), Color::Black);
        assert_eq!(stack.moves(), &[first]);

        stack.unwind();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.into_board(), Board::new());
    }

    #[test]
    fn unwinds_through_captures() {
        let mut stack = MoveStack::new(Board::new());
        for mv in [
            Move::Regular { source: 12, dest: 28 },
            Move::Regular { source: 51, dest: 35 },
        ] {
            stack.push(mv);
        }
        let capture = stack
            .board()
            .possible_moves()
            .into_iter()
            .find(|mv| mv.is_attack())
            .expect("e4xd5 should be available");
        assert_eq!(capture.to_string(), "e4xd5");
        stack.push(capture);
        assert!(stack.board().consistency_check().is_ok());

        stack.unwind();
        assert_eq!(stack.board(), &Board::new());
    }
}
