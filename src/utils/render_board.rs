//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the CLI,
//! optionally overlaying a piece's trajectory (`*`) and capturing set (`x`).

use crate::board::board::Board;
use crate::board::piece::{PieceKind, Trajectory};
use crate::board::position::Position;
use crate::board::suit::Suit;

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_board(board: &Board) -> String {
    render_with(board, |_| None)
}

/// Same as `render_board`, marking trajectory squares with `*` and capturing squares with `x`.
pub fn render_trajectory(board: &Board, trajectory: &Trajectory) -> String {
    render_with(board, |p| {
        if trajectory.capturing.contains(&p) {
            Some('x')
        } else if trajectory.trajectory.contains(&p) {
            Some('*')
        } else {
            None
        }
    })
}

fn render_with(board: &Board, overlay: impl Fn(Position) -> Option<char>) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8i16).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8i16 {
            let Ok(p) = Position::from_file_rank(file, rank) else {
                continue;
            };
            let glyph = overlay(p)
                .or_else(|| board.piece_at(p).map(|piece| piece_to_unicode(piece.suit(), piece.kind())))
                .unwrap_or('·');
            out.push(glyph);

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

pub fn piece_to_unicode(suit: Suit, kind: PieceKind) -> char {
    match (suit, kind) {
        (Suit::White, PieceKind::Pawn) => '♙',
        (Suit::White, PieceKind::Knight) => '♘',
        (Suit::White, PieceKind::Bishop) => '♗',
        (Suit::White, PieceKind::Rook) => '♖',
        (Suit::White, PieceKind::Queen) => '♕',
        (Suit::White, PieceKind::King) => '♔',
        (Suit::Black, PieceKind::Pawn) => '♟',
        (Suit::Black, PieceKind::Knight) => '♞',
        (Suit::Black, PieceKind::Bishop) => '♝',
        (Suit::Black, PieceKind::Rook) => '♜',
        (Suit::Black, PieceKind::Queen) => '♛',
        (Suit::Black, PieceKind::King) => '♚',
    }
}
