//! Crate root module declarations for the Plum board core.
//!
//! Exposes the position representation, pseudo-legal move generation,
//! move application, material scoring and text rendering so search code,
//! tests and tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod move_stack;
    pub mod square_state;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_apply;
    pub mod move_generator;
    pub mod perft;
    pub mod try_move;
}

pub mod search {
    pub mod board_scoring;
}

pub mod utils {
    pub mod random_playout;
    pub mod render_board;
}

pub use errors::{BoardError, BoardResult};
pub use game_state::board::Board;
pub use game_state::chess_types::{BitBoard, Color, Delta, PieceKind, Square};
pub use game_state::move_stack::MoveStack;
pub use game_state::square_state::{PieceRecord, SquareState};
pub use moves::move_descriptions::Move;
