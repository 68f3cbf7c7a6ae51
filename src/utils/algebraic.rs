//! Square conversions for long algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Position`
//! values; reused by the configuration reader, the CLI and the renderer.

use crate::board::position::Position;
use crate::chess_errors::ChessErrors;

/// Convert long algebraic notation (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessErrors> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Position::from_file_rank((file - b'a') as i16, (rank - b'1') as i16)
}

/// Convert a position to long algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> String {
    let file_char = char::from(b'a' + position.file());
    let rank_char = char::from(b'1' + position.rank());
    format!("{file_char}{rank_char}")
}
