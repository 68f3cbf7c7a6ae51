//! Bishop trajectory: slides along the four diagonals.

use crate::board::board::Board;
use crate::board::direction::DIAGONAL_DIRECTIONS;
use crate::board::piece::Trajectory;
use crate::board::position::Position;
use crate::board::suit::Suit;
use crate::moves::move_shared::slide_trajectory;

pub fn bishop_trajectory(board: &Board, from: Position, suit: Suit) -> Trajectory {
    slide_trajectory(board, from, suit, &DIAGONAL_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use crate::board::piece::PieceKind;
    use crate::board::suit::Suit;
    use crate::moves::move_shared::test_utils::*;

    #[test]
    fn bishop_on_d4_has_thirteen_squares() {
        let board = board_with(&[(PieceKind::Bishop, Suit::White, "d4")]);
        assert_eq!(trajectory_of(&board, "d4").trajectory.len(), 13);
    }

    #[test]
    fn enemy_and_friend_clip_diagonals() {
        let board = board_with(&[
            (PieceKind::Bishop, Suit::White, "d4"),
            (PieceKind::Knight, Suit::Black, "f6"),
            (PieceKind::Pawn, Suit::White, "b6"),
        ]);
        let t = trajectory_of(&board, "d4");

        assert!(t.trajectory.contains(&sq("e5")));
        assert!(!t.trajectory.contains(&sq("f6")));
        assert!(!t.trajectory.contains(&sq("g7")));
        assert!(!t.trajectory.contains(&sq("h8")));
        assert_eq!(t.capturing, squares(&["f6"]));

        assert!(t.trajectory.contains(&sq("c5")));
        assert!(!t.trajectory.contains(&sq("b6")));
        assert!(!t.trajectory.contains(&sq("a7")));
        assert!(!t.capturing.contains(&sq("b6")));
    }
}
