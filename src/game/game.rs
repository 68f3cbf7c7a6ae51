//! Turn-taking wrapper around a `Board`.
//!
//! `Game` owns the board, tracks whose turn it is and only forwards moves to
//! `Board::move_piece` when the destination is in the mover's freshly
//! computed trajectory or capturing set. Listeners are notified after each
//! accepted move (for animation hooks); they see the board read-only and
//! cannot influence the result.

use tracing::{info, warn};

use crate::board::board::Board;
use crate::board::piece::{PieceId, Trajectory};
use crate::board::position::Position;
use crate::board::suit::Suit;
use crate::chess_errors::ChessErrors;
use crate::config::config_errors::ConfigErrors;
use crate::config::game_config::GameConfig;

/// One accepted move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    pub captured: Option<PieceId>,
}

/// Observer for accepted moves.
pub trait MoveListener {
    fn piece_moved(&mut self, board: &Board, record: &MoveRecord);
}

pub struct Game {
    board: Board,
    side_to_move: Suit,
    history: Vec<MoveRecord>,
    listeners: Vec<Box<dyn MoveListener>>,
}

impl Game {
    /// White moves first.
    pub fn new(board: Board) -> Self {
        Game {
            board,
            side_to_move: Suit::White,
            history: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn new_game() -> Self {
        Self::from_config(&GameConfig::standard()).expect("standard layout should always build")
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigErrors> {
        Ok(Self::new(config.build_board()?))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Suit {
        self.side_to_move
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn add_listener(&mut self, listener: Box<dyn MoveListener>) {
        self.listeners.push(listener);
    }

    /// Trajectory of the piece on `from`.
    pub fn destinations(&self, from: Position) -> Result<Trajectory, ChessErrors> {
        self.board
            .trajectory_at(from)
            .ok_or(ChessErrors::MoveFromEmptySquare(from))
    }

    /// Trajectories of every active piece belonging to `suit`.
    pub fn trajectories_for(&self, suit: Suit) -> Vec<(PieceId, Trajectory)> {
        self.board
            .pieces_of(suit)
            .map(|(id, piece)| (id, piece.calc_trajectory(&self.board)))
            .collect()
    }

    /// Moves the side to move's piece from `from` to `to` if it can reach it.
    pub fn try_move(&mut self, from: Position, to: Position) -> Result<MoveRecord, ChessErrors> {
        let record = self.validate(from, to).inspect_err(|e| {
            warn!(%from, %to, error = %e, "move rejected");
        })?;
        let captured = self.board.move_piece(from, to)?;
        let record = MoveRecord { captured, ..record };

        self.history.push(record);
        self.side_to_move = self.side_to_move.opposite();
        info!(%from, %to, captured = captured.is_some(), "move applied");

        for listener in &mut self.listeners {
            listener.piece_moved(&self.board, &record);
        }
        Ok(record)
    }

    fn validate(&self, from: Position, to: Position) -> Result<MoveRecord, ChessErrors> {
        let id = self
            .board
            .occupant_at(from)
            .ok_or(ChessErrors::MoveFromEmptySquare(from))?;
        let piece = self.board.piece(id)?;
        if piece.suit() != self.side_to_move {
            return Err(ChessErrors::NotSideToMove(from));
        }
        if !piece.calc_trajectory(&self.board).reaches(to) {
            return Err(ChessErrors::UnreachableSquare(from, to));
        }
        Ok(MoveRecord {
            piece: id,
            from,
            to,
            captured: None,
        })
    }
}
