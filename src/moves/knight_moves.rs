//! Knight trajectory over the eight L-shaped offsets.

use crate::board::board::Board;
use crate::board::piece::Trajectory;
use crate::board::position::Position;
use crate::board::suit::Suit;
use crate::moves::move_shared::step_trajectory;

/// Counter-clockwise starting east-north-east.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub fn knight_trajectory(board: &Board, from: Position, suit: Suit) -> Trajectory {
    step_trajectory(board, from, suit, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod tests {
    use crate::board::piece::PieceKind;
    use crate::board::suit::Suit;
    use crate::moves::move_shared::test_utils::*;

    #[test]
    fn knight_on_d4_has_eight_targets() {
        let board = board_with(&[(PieceKind::Knight, Suit::White, "d4")]);
        let t = trajectory_of(&board, "d4");
        assert_eq!(
            t.trajectory,
            squares(&["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"])
        );
        assert!(t.capturing.is_empty());
    }

    #[test]
    fn knight_jumps_over_blockers() {
        let board = board_with(&[
            (PieceKind::Knight, Suit::White, "b1"),
            (PieceKind::Pawn, Suit::White, "b2"),
            (PieceKind::Pawn, Suit::White, "c2"),
            (PieceKind::Pawn, Suit::White, "d2"),
            (PieceKind::Pawn, Suit::Black, "c3"),
        ]);
        let t = trajectory_of(&board, "b1");
        assert_eq!(t.trajectory, squares(&["a3"]));
        assert_eq!(t.capturing, squares(&["c3"]));
    }
}
