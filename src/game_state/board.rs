//! Authoritative position representation.
//!
//! `Board` keeps two views of the same position: twelve bitboards, one per
//! (color, kind) pair, and a 64-entry square table. Construction derives the
//! square table from the bitboards; every later mutation goes through
//! `place`/`vacate`, which touch both views so they never drift apart.

use crate::errors::{BoardError, BoardResult};
use crate::game_state::chess_rules::STARTING_BITBOARDS;
use crate::game_state::chess_types::*;
use crate::game_state::square_state::{PieceRecord, SquareState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // [piece_index(color, kind)]
    pub(crate) bitboards: [BitBoard; BITBOARD_COUNT],
    pub(crate) square_table: [SquareState; SQUARE_COUNT],
    pub(crate) side_to_move: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position with white to move.
    pub fn new() -> Self {
        Self::with_bitboards(STARTING_BITBOARDS, Color::White)
    }

    /// A board with no pieces at all.
    pub fn empty(side_to_move: Color) -> Self {
        Self::with_bitboards([BitBoard::EMPTY; BITBOARD_COUNT], side_to_move)
    }

    /// Build a position from twelve masks indexed by `piece_index`.
    pub fn from_bitboards(
        bitboards: [BitBoard; BITBOARD_COUNT],
        side_to_move: Color,
    ) -> BoardResult<Self> {
        if let Some(square) = first_overlap(&bitboards) {
            return Err(BoardError::OverlappingPieces { square });
        }
        Ok(Self::with_bitboards(bitboards, side_to_move))
    }

    fn with_bitboards(bitboards: [BitBoard; BITBOARD_COUNT], side_to_move: Color) -> Self {
        let mut square_table = [SquareState::empty(0); SQUARE_COUNT];
        for (square, state) in square_table.iter_mut().enumerate() {
            let square = square as Square;
            *state = SquareState {
                square,
                occupant: scan_bitboards(&bitboards, square),
            };
        }

        Self {
            bitboards,
            square_table,
            side_to_move,
        }
    }

    /// Put a piece on an empty square.
    pub fn put_piece(&mut self, square: Square, color: Color, kind: PieceKind) -> BoardResult<()> {
        let state = self
            .square_table
            .get(square as usize)
            .ok_or(BoardError::SquareOutOfRange { square })?;
        if let Some(occupant) = state.occupant {
            return Err(BoardError::SquareOccupied { square, occupant });
        }
        self.place(square, PieceRecord::new(color, kind));
        Ok(())
    }

    /// Take whatever sits on `square` off the board.
    pub fn remove_piece(&mut self, square: Square) -> Option<PieceRecord> {
        if square as usize >= SQUARE_COUNT {
            return None;
        }
        self.vacate(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Hand the move to `color` without touching the pieces.
    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub fn square_table(&self) -> &[SquareState; SQUARE_COUNT] {
        &self.square_table
    }

    #[inline]
    pub fn square_state(&self, square: Square) -> &SquareState {
        &self.square_table[square as usize]
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<PieceRecord> {
        self.square_table[square as usize].occupant
    }

    #[inline]
    pub fn bitboard(&self, color: Color, kind: PieceKind) -> BitBoard {
        self.bitboards[piece_index(color, kind)]
    }

    /// Every square holding a piece of the side to move.
    #[inline]
    pub fn friends(&self) -> BitBoard {
        self.position_mask(self.side_to_move)
    }

    /// Every square holding a piece of the side not to move.
    #[inline]
    pub fn enemies(&self) -> BitBoard {
        self.position_mask(self.side_to_move.toggle())
    }

    pub fn position_mask(&self, color: Color) -> BitBoard {
        PieceKind::ALL
            .iter()
            .fold(BitBoard::EMPTY, |mask, &kind| mask | self.bitboard(color, kind))
    }

    #[inline]
    pub fn occupancy(&self) -> BitBoard {
        self.position_mask(Color::White) | self.position_mask(Color::Black)
    }

    /// Verify that no square is claimed twice by the bitboards and that the
    /// square table mirrors them exactly.
    pub fn consistency_check(&self) -> BoardResult<()> {
        if let Some(square) = first_overlap(&self.bitboards) {
            return Err(BoardError::OverlappingPieces { square });
        }
        for (index, state) in self.square_table.iter().enumerate() {
            let square = index as Square;
            let expected = scan_bitboards(&self.bitboards, square);
            if state.square != square || state.occupant != expected {
                return Err(BoardError::SquareTableMismatch {
                    square,
                    expected,
                    found: state.occupant,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn place(&mut self, square: Square, record: PieceRecord) {
        if let Some(previous) = self.square_table[square as usize].occupant {
            self.bitboards[piece_index(previous.color, previous.kind)].clear(square);
        }
        self.bitboards[piece_index(record.color, record.kind)].set(square);
        self.square_table[square as usize].occupant = Some(record);
    }

    pub(crate) fn vacate(&mut self, square: Square) -> Option<PieceRecord> {
        let previous = self.square_table[square as usize].occupant.take()?;
        self.bitboards[piece_index(previous.color, previous.kind)].clear(square);
        Some(previous)
    }
}

/// First (color, kind) whose bitboard has `square` set, kinds scanned in
/// `PieceKind::ALL` order and white before black within a kind.
fn scan_bitboards(bitboards: &[BitBoard; BITBOARD_COUNT], square: Square) -> Option<PieceRecord> {
    for kind in PieceKind::ALL {
        for color in [Color::White, Color::Black] {
            if bitboards[piece_index(color, kind)].contains(square) {
                return Some(PieceRecord::new(color, kind));
            }
        }
    }
    None
}

fn first_overlap(bitboards: &[BitBoard; BITBOARD_COUNT]) -> Option<Square> {
    let mut seen = 0u64;
    for board in bitboards {
        let clash = seen & board.0;
        if clash != 0 {
            return Some(clash.trailing_zeros() as Square);
        }
        seen |= board.0;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_mirrors_starting_bitboards() {
        let board = Board::new();
        assert_eq!(board.side_to_move(), Color::White);
        assert!(board.consistency_check().is_ok());

        assert_eq!(
            board.piece_at(4),
            Some(PieceRecord::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(59),
            Some(PieceRecord::new(Color::Black, PieceKind::Queen))
        );
        assert!(board.square_state(27).is_empty());
        for (index, state) in board.square_table().iter().enumerate() {
            assert_eq!(state.square as usize, index);
        }
    }

    #[test]
    fn friends_and_enemies_follow_side_to_move() {
        let mut board = Board::new();
        assert_eq!(board.friends(), BitBoard(0x0000_0000_0000_FFFF));
        assert_eq!(board.enemies(), BitBoard(0xFFFF_0000_0000_0000));

        board.set_side_to_move(Color::Black);
        assert_eq!(board.friends(), BitBoard(0xFFFF_0000_0000_0000));
        assert_eq!(board.position_mask(Color::White), BitBoard(0x0000_0000_0000_FFFF));
        assert_eq!(board.occupancy().count(), 32);
    }

    #[test]
    fn overlapping_bitboards_are_rejected() {
        let mut masks = [BitBoard::EMPTY; BITBOARD_COUNT];
        masks[piece_index(Color::White, PieceKind::Rook)] = BitBoard::from_square(0);
        masks[piece_index(Color::Black, PieceKind::Queen)] = BitBoard::from_square(0);
        assert_eq!(
            Board::from_bitboards(masks, Color::White),
            Err(BoardError::OverlappingPieces { square: 0 })
        );
    }

    #[test]
    fn put_and_remove_keep_views_in_sync() {
        let mut board = Board::empty(Color::White);
        board.put_piece(27, Color::Black, PieceKind::Knight).unwrap();
        assert!(board.bitboard(Color::Black, PieceKind::Knight).contains(27));
        assert!(board.consistency_check().is_ok());

        let err = board.put_piece(27, Color::White, PieceKind::Pawn).unwrap_err();
        assert!(matches!(err, BoardError::SquareOccupied { square: 27, .. }));
        assert_eq!(
            board.put_piece(64, Color::White, PieceKind::Pawn),
            Err(BoardError::SquareOutOfRange { square: 64 })
        );

        assert_eq!(
            board.remove_piece(27),
            Some(PieceRecord::new(Color::Black, PieceKind::Knight))
        );
        assert!(board.occupancy().is_empty());
        assert!(board.consistency_check().is_ok());
    }

    #[test]
    fn consistency_check_reports_drift() {
        let mut board = Board::new();
        board.square_table[12].occupant = None;
        assert_eq!(
            board.consistency_check(),
            Err(BoardError::SquareTableMismatch {
                square: 12,
                expected: Some(PieceRecord::new(Color::White, PieceKind::Pawn)),
                found: None,
            })
        );
    }
}
