//! The 8x8 occupancy grid and the piece arena it points into.
//!
//! `Board` is the single source of truth for where every piece stands. Cells
//! hold `PieceId` handles into the arena; pieces carry their own `Position`,
//! and `move_piece` is the only operation that changes both.

use tracing::debug;

use crate::board::piece::{Piece, PieceId, PieceKind, Trajectory};
use crate::board::position::Position;
use crate::board::suit::Suit;
use crate::chess_errors::ChessErrors;

/// Occupancy grid plus the arena of every piece ever placed, captured ones included.
///
/// Look pieces up by square with `occupant_at`/`piece_at` or by handle with `piece`.
#[derive(Clone, Debug, Default)]
pub struct Board {
    // [file][rank]
    cells: [[Option<PieceId>; 8]; 8],
    // Captured pieces stay here with `captured == true` so handles stay valid.
    pieces: Vec<Piece>,
}

impl Board {
    /// An empty board with no pieces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new piece to the arena and puts it on `position`.
    pub fn place_piece(
        &mut self,
        kind: PieceKind,
        suit: Suit,
        position: Position,
    ) -> Result<PieceId, ChessErrors> {
        if self.occupant_at(position).is_some() {
            return Err(ChessErrors::SquareOccupied(position));
        }
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(kind, suit, position));
        *self.cell_mut(position) = Some(id);
        debug!(kind = kind.name(), suit = suit.name(), square = %position, "placed piece");
        Ok(id)
    }

    #[inline]
    fn cell_mut(&mut self, position: Position) -> &mut Option<PieceId> {
        &mut self.cells[position.file() as usize][position.rank() as usize]
    }

    /// The handle on `position`, if any.
    #[inline]
    pub fn occupant_at(&self, position: Position) -> Option<PieceId> {
        self.cells[position.file() as usize][position.rank() as usize]
    }

    /// Same as `occupant_at` for raw indices; out-of-range input is an error.
    pub fn occupant_at_coords(&self, file: i16, rank: i16) -> Result<Option<PieceId>, ChessErrors> {
        let position = Position::from_file_rank(file, rank)?;
        Ok(self.occupant_at(position))
    }

    pub fn piece(&self, id: PieceId) -> Result<&Piece, ChessErrors> {
        self.pieces.get(id.index()).ok_or(ChessErrors::UnknownPiece(id))
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.occupant_at(position)
            .and_then(|id| self.pieces.get(id.index()))
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.occupant_at(position).is_none()
    }

    /// True if `position` holds a piece of the suit opposing `suit`.
    #[inline]
    pub fn is_enemy_of(&self, position: Position, suit: Suit) -> bool {
        self.piece_at(position).is_some_and(|p| p.suit != suit)
    }

    /// True if `position` holds a piece of `suit`.
    #[inline]
    pub fn is_friendly_to(&self, position: Position, suit: Suit) -> bool {
        self.piece_at(position).is_some_and(|p| p.suit == suit)
    }

    /// Relocates the occupant of `from` to `to`, capturing whatever stood on `to`.
    ///
    /// Nothing is mutated when an error is returned.
    ///
    /// # Returns
    ///
    /// * `Result<Option<PieceId>, ChessErrors>` - the captured piece, if any.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<Option<PieceId>, ChessErrors> {
        let mover = self
            .occupant_at(from)
            .ok_or(ChessErrors::MoveFromEmptySquare(from))?;
        if from == to {
            return Err(ChessErrors::MoveToSameSquare(from));
        }
        let suit = self.piece(mover)?.suit;
        if self.is_friendly_to(to, suit) {
            return Err(ChessErrors::CannotCaptureFriendly(to));
        }

        let captured = self.occupant_at(to);
        if let Some(victim) = captured {
            self.pieces[victim.index()].captured = true;
            debug!(square = %to, "captured piece");
        }
        *self.cell_mut(from) = None;
        *self.cell_mut(to) = Some(mover);
        self.pieces[mover.index()].position = to;
        debug_assert_eq!(self.occupant_at(self.pieces[mover.index()].position), Some(mover));
        Ok(captured)
    }

    /// Trajectory of the piece behind `id` on this board.
    pub fn calc_trajectory(&self, id: PieceId) -> Result<Trajectory, ChessErrors> {
        Ok(self.piece(id)?.calc_trajectory(self))
    }

    /// Trajectory of whatever stands on `position`; `None` for an empty square.
    pub fn trajectory_at(&self, position: Position) -> Option<Trajectory> {
        self.piece_at(position).map(|p| p.calc_trajectory(self))
    }

    /// Every piece ever placed, captured ones included.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces.iter().enumerate().map(|(i, p)| (PieceId(i), p))
    }

    pub fn active_pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces().filter(|(_, p)| !p.captured)
    }

    pub fn captured_pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces().filter(|(_, p)| p.captured)
    }

    pub fn pieces_of(&self, suit: Suit) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.active_pieces().filter(move |(_, p)| p.suit == suit)
    }
}
