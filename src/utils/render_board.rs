//! Terminal-oriented board renderer.
//!
//! Reads the square table and writes a human-readable board into any
//! `fmt::Write` sink, rank 8 at the top. Never mutates the board.

use std::fmt::{self, Write};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, BOARD_WIDTH};
use crate::game_state::square_state::PieceRecord;

const ANSI_GRAY: &str = "\x1b[90m";
const ANSI_BLACK: &str = "\x1b[30m";
const ANSI_LIGHT_BG: &str = "\x1b[47m";
const ANSI_DARK_BG: &str = "\x1b[100m";
const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Shade squares and labels with ANSI escape codes.
    pub ansi_colors: bool,
}

pub fn render_board<W: Write>(board: &Board, options: RenderOptions, out: &mut W) -> fmt::Result {
    for rank in (0..BOARD_WIDTH).rev() {
        if options.ansi_colors {
            write!(out, "{ANSI_GRAY}{} {ANSI_BLACK}", rank + 1)?;
        } else {
            write!(out, "{} ", rank + 1)?;
        }

        for file in 0..BOARD_WIDTH {
            let square = (rank * BOARD_WIDTH + file) as u8;
            let occupant = board.piece_at(square);
            if options.ansi_colors {
                let background = if (rank + file) % 2 == 1 {
                    ANSI_LIGHT_BG
                } else {
                    ANSI_DARK_BG
                };
                let glyph = occupant.map_or(' ', piece_to_unicode);
                write!(out, "{background}{glyph} ")?;
            } else {
                out.write_char(occupant.map_or('·', piece_to_unicode))?;
                if file < BOARD_WIDTH - 1 {
                    out.write_char(' ')?;
                }
            }
        }

        if options.ansi_colors {
            out.write_str(ANSI_RESET)?;
        }
        out.write_char('\n')?;
    }

    if options.ansi_colors {
        out.write_str(ANSI_GRAY)?;
    }
    out.write_str("  a b c d e f g h")?;
    if options.ansi_colors {
        out.write_str(ANSI_RESET)?;
    }
    Ok(())
}

pub fn render_board_to_string(board: &Board, options: RenderOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render_board(board, options, &mut out);
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_board(self, RenderOptions::default(), f)
    }
}

fn piece_to_unicode(record: PieceRecord) -> char {
    match (record.color, record.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_board_to_string, RenderOptions};
    use crate::game_state::board::Board;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_start_position() {
        let expected = "\
8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜
7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟
6 · · · · · · · ·
5 · · · · · · · ·
4 · · · · · · · ·
3 · · · · · · · ·
2 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙
1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖
  a b c d e f g h";
        assert_eq!(render_board_to_string(&Board::new(), RenderOptions::default()), expected);
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn ansi_mode_shades_every_rank() {
        let text = render_board_to_string(&Board::new(), RenderOptions { ansi_colors: true });
        assert_eq!(text.lines().count(), 9);
        assert_eq!(text.matches("\x1b[0m").count(), 9);
        assert!(text.contains('♔'));
    }
}
