//! King trajectory: one step in each of the eight compass directions.

use crate::board::board::Board;
use crate::board::direction::DIRECTION_VECTORS;
use crate::board::piece::Trajectory;
use crate::board::position::Position;
use crate::board::suit::Suit;
use crate::moves::move_shared::step_trajectory;

pub fn king_trajectory(board: &Board, from: Position, suit: Suit) -> Trajectory {
    step_trajectory(board, from, suit, &DIRECTION_VECTORS)
}

#[cfg(test)]
mod tests {
    use crate::board::piece::PieceKind;
    use crate::board::suit::Suit;
    use crate::moves::move_shared::test_utils::*;

    #[test]
    fn corner_king_has_three_squares() {
        let board = board_with(&[(PieceKind::King, Suit::White, "a1")]);
        let t = trajectory_of(&board, "a1");
        assert_eq!(t.trajectory, squares(&["a2", "b1", "b2"]));
        assert!(t.capturing.is_empty());
    }

    #[test]
    fn central_king_has_eight_squares() {
        let board = board_with(&[(PieceKind::King, Suit::Black, "e5")]);
        assert_eq!(trajectory_of(&board, "e5").trajectory.len(), 8);
    }

    #[test]
    fn adjacent_enemy_is_capture_only_and_friend_is_dropped() {
        let board = board_with(&[
            (PieceKind::King, Suit::White, "a1"),
            (PieceKind::Rook, Suit::Black, "a2"),
            (PieceKind::Pawn, Suit::White, "b2"),
        ]);
        let t = trajectory_of(&board, "a1");
        assert_eq!(t.trajectory, squares(&["b1"]));
        assert_eq!(t.capturing, squares(&["a2"]));
    }
}
