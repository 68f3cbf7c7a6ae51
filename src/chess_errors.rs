//! Errors used throughout the board core.
//!
//! `ChessErrors` is the single error type returned by board, piece and game
//! operations. Off-board arithmetic during trajectory scanning also produces
//! `ChessErrors::OffBoard`, but scanners filter that variant out instead of
//! propagating it.
//!
//! Usage guidelines:
//! - `OffBoard` is a normal condition while walking directions.
//! - Every other variant indicates a caller bug or a desynchronized state and
//!   is surfaced immediately; nothing in the crate retries.

use thiserror::Error;

use crate::board::piece::PieceId;
use crate::board::position::Position;

/// Unified error type for the board core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Shifting `origin` by `(d_file, d_rank)` would leave the board.
    ///
    /// Payload: (origin, d_file, d_rank)
    #[error("moving {0} by ({1}, {2}) leaves the board")]
    OffBoard(Position, i8, i8),

    /// Raw file/rank indices outside `0..=7`.
    #[error("invalid file or rank ({0}, {1})")]
    InvalidFileOrRank(i16, i16),

    /// A square string such as `"e9"` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// Tried to move a piece off an empty square.
    #[error("no piece to move on {0}")]
    MoveFromEmptySquare(Position),

    /// Source and destination of a move are the same square.
    #[error("cannot move a piece onto its own square {0}")]
    MoveToSameSquare(Position),

    /// The destination holds a piece of the mover's own suit.
    #[error("cannot capture a friendly piece on {0}")]
    CannotCaptureFriendly(Position),

    /// Tried to place a piece onto a square that already holds one.
    #[error("square {0} is already occupied")]
    SquareOccupied(Position),

    /// A handle that does not belong to this board.
    #[error("unknown piece handle {0:?}")]
    UnknownPiece(PieceId),

    /// The handle refers to a piece that has already been captured.
    #[error("piece {0:?} has been captured")]
    PieceCaptured(PieceId),

    /// The piece on the source square belongs to the side not on move.
    #[error("piece on {0} does not belong to the side to move")]
    NotSideToMove(Position),

    /// The destination is neither in the trajectory nor the capturing set.
    ///
    /// Payload: (from, to)
    #[error("{0} -> {1} is not a reachable square")]
    UnreachableSquare(Position, Position),
}
