use crate::game_state::board::Board;
use crate::game_state::chess_types::{file_of, rank_of, square_at, Delta, Square};
use crate::moves::move_descriptions::Move;

impl Board {
    /// Classify a single step of `delta` from `source` for the side to move.
    ///
    /// Off-board targets and targets holding a friendly piece come back as
    /// `Move::Invalid`; empty targets are `Regular`; enemy-held targets are
    /// `Attack` carrying the captured kind.
    pub fn try_move(&self, source: Square, delta: Delta) -> Move {
        let Some(dest) = square_at(rank_of(source) + delta.rank, file_of(source) + delta.file)
        else {
            return Move::Invalid;
        };

        match self.square_table[dest as usize].occupant {
            None => Move::Regular { source, dest },
            Some(record) if record.color == self.side_to_move => Move::Invalid,
            Some(record) => Move::Attack {
                source,
                dest,
                captured: record.kind,
            },
        }
    }
}
