//! Piece identity and the per-kind trajectory dispatch.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::board::board::Board;
use crate::board::position::Position;
use crate::board::suit::Suit;
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};

/// Represents the type (class) of a chess piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    /// A pawn piece.
    Pawn,
    /// A knight piece.
    Knight,
    /// A bishop piece.
    Bishop,
    /// A rook piece.
    Rook,
    /// A queen piece.
    Queen,
    /// A king piece.
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    pub fn from_name(name: &str) -> Option<PieceKind> {
        ALL_PIECE_KINDS
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Layout letter: uppercase for White, lowercase for Black.
    pub const fn to_char(self, suit: Suit) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match suit {
            Suit::White => c.to_ascii_uppercase(),
            Suit::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<(PieceKind, Suit)> {
        let suit = if c.is_ascii_uppercase() {
            Suit::White
        } else {
            Suit::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, suit))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-owning handle to a piece held in a `Board`'s piece arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Squares a piece can reach, split by whether landing there captures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trajectory {
    /// Empty squares reachable without capturing.
    pub trajectory: BTreeSet<Position>,
    /// Enemy-occupied squares the piece threatens.
    pub capturing: BTreeSet<Position>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty() && self.capturing.is_empty()
    }

    /// True if `to` is in either set.
    pub fn reaches(&self, to: Position) -> bool {
        self.trajectory.contains(&to) || self.capturing.contains(&to)
    }
}

/// A piece on (or formerly on) a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) suit: Suit,
    pub(crate) position: Position,
    pub(crate) captured: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, suit: Suit, position: Position) -> Self {
        Piece {
            kind,
            suit,
            position,
            captured: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Last square the piece occupied. For a captured piece this is the
    /// square it was captured on.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Computes the trajectory and capturing sets against the current board.
    ///
    /// Pure read of `board`; a captured piece, or one with no moves, yields
    /// two empty sets.
    pub fn calc_trajectory(&self, board: &Board) -> Trajectory {
        if self.captured {
            return Trajectory::new();
        }
        let result = match self.kind {
            PieceKind::Pawn => pawn_moves::pawn_trajectory(board, self.position, self.suit),
            PieceKind::Knight => knight_moves::knight_trajectory(board, self.position, self.suit),
            PieceKind::Bishop => bishop_moves::bishop_trajectory(board, self.position, self.suit),
            PieceKind::Rook => rook_moves::rook_trajectory(board, self.position, self.suit),
            PieceKind::Queen => queen_moves::queen_trajectory(board, self.position, self.suit),
            PieceKind::King => king_moves::king_trajectory(board, self.position, self.suit),
        };
        debug!(
            kind = self.kind.name(),
            suit = self.suit.name(),
            square = %self.position,
            trajectory = result.trajectory.len(),
            capturing = result.capturing.len(),
            "calc_trajectory"
        );
        result
    }
}
