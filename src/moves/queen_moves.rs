//! Queen trajectory: rook and bishop rays combined.

use crate::board::board::Board;
use crate::board::direction::ALL_DIRECTIONS;
use crate::board::piece::Trajectory;
use crate::board::position::Position;
use crate::board::suit::Suit;
use crate::moves::move_shared::slide_trajectory;

pub fn queen_trajectory(board: &Board, from: Position, suit: Suit) -> Trajectory {
    slide_trajectory(board, from, suit, &ALL_DIRECTIONS)
}
