//! Rook trajectory: slides along the four orthogonal directions.

use crate::board::board::Board;
use crate::board::direction::ORTHOGONAL_DIRECTIONS;
use crate::board::piece::Trajectory;
use crate::board::position::Position;
use crate::board::suit::Suit;
use crate::moves::move_shared::slide_trajectory;

pub fn rook_trajectory(board: &Board, from: Position, suit: Suit) -> Trajectory {
    slide_trajectory(board, from, suit, &ORTHOGONAL_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use crate::board::piece::PieceKind;
    use crate::board::suit::Suit;
    use crate::moves::move_shared::test_utils::*;

    #[test]
    fn rook_on_d4_has_fourteen_squares() {
        let board = board_with(&[(PieceKind::Rook, Suit::White, "d4")]);
        let t = trajectory_of(&board, "d4");
        assert_eq!(t.trajectory.len(), 14);
        assert!(t.trajectory.iter().all(|p| p.file() == 3 || p.rank() == 3));
        assert!(!t.trajectory.contains(&sq("d4")));
    }

    #[test]
    fn blocker_stops_ray() {
        let board = board_with(&[
            (PieceKind::Rook, Suit::Black, "a1"),
            (PieceKind::Bishop, Suit::White, "a4"),
            (PieceKind::Knight, Suit::Black, "c1"),
        ]);
        let t = trajectory_of(&board, "a1");
        assert_eq!(t.trajectory, squares(&["a2", "a3", "b1"]));
        assert_eq!(t.capturing, squares(&["a4"]));
    }
}
