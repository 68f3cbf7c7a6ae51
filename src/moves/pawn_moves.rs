//! Pawn trajectory.
//!
//! Quiet moves go straight forward: one step onto an empty square, or two
//! steps from the suit's starting rank when both squares are empty. Captures
//! go diagonally forward and only onto enemy-occupied squares. En-passant and
//! promotion are left to callers.

use crate::board::board::Board;
use crate::board::piece::Trajectory;
use crate::board::position::Position;
use crate::board::suit::Suit;

/// Generates the movement for a pawn that is single stepping
pub fn pawn_single_step(from: Position, suit: Suit) -> Option<Position> {
    from.offset(0, suit.forward()).ok()
}

/// Generates the movement for a pawn that is double stepping; `None` off the starting rank
pub fn pawn_double_step(from: Position, suit: Suit) -> Option<Position> {
    if from.rank() != suit.pawn_start_rank() {
        return None;
    }
    from.offset(0, 2 * suit.forward()).ok()
}

/// Both diagonal-forward squares that exist on the board
pub fn pawn_capture_squares(from: Position, suit: Suit) -> impl Iterator<Item = Position> {
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_file| from.offset(d_file, suit.forward()).ok())
}

pub fn pawn_trajectory(board: &Board, from: Position, suit: Suit) -> Trajectory {
    let mut out = Trajectory::new();

    if let Some(one) = pawn_single_step(from, suit).filter(|p| board.is_empty(*p)) {
        out.trajectory.insert(one);
        if let Some(two) = pawn_double_step(from, suit).filter(|p| board.is_empty(*p)) {
            out.trajectory.insert(two);
        }
    }

    for target in pawn_capture_squares(from, suit) {
        if board.is_enemy_of(target, suit) {
            out.capturing.insert(target);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::board::piece::PieceKind;
    use crate::board::suit::Suit;
    use crate::moves::move_shared::test_utils::*;

    #[test]
    fn white_pawn_double_steps_from_start() {
        let board = board_with(&[(PieceKind::Pawn, Suit::White, "e2")]);
        let t = trajectory_of(&board, "e2");
        assert_eq!(t.trajectory, squares(&["e3", "e4"]));
        assert!(t.capturing.is_empty());
    }

    #[test]
    fn black_pawn_moves_toward_rank_one() {
        let board = board_with(&[(PieceKind::Pawn, Suit::Black, "e7")]);
        assert_eq!(trajectory_of(&board, "e7").trajectory, squares(&["e6", "e5"]));
    }

    #[test]
    fn blocked_first_square_prevents_double_step() {
        for blocker in [Suit::White, Suit::Black] {
            let board = board_with(&[
                (PieceKind::Pawn, Suit::White, "d2"),
                (PieceKind::Knight, blocker, "d3"),
            ]);
            let t = trajectory_of(&board, "d2");
            assert!(t.trajectory.is_empty());
            assert!(t.capturing.is_empty());
        }
    }

    #[test]
    fn blocked_second_square_allows_single_step() {
        let board = board_with(&[
            (PieceKind::Pawn, Suit::White, "d2"),
            (PieceKind::Knight, Suit::Black, "d4"),
        ]);
        let t = trajectory_of(&board, "d2");
        assert_eq!(t.trajectory, squares(&["d3"]));
        assert!(t.capturing.is_empty());
    }

    #[test]
    fn no_double_step_off_starting_rank() {
        let board = board_with(&[(PieceKind::Pawn, Suit::White, "d3")]);
        assert_eq!(trajectory_of(&board, "d3").trajectory, squares(&["d4"]));
    }

    #[test]
    fn captures_only_enemy_diagonals() {
        let board = board_with(&[
            (PieceKind::Pawn, Suit::White, "e4"),
            (PieceKind::Pawn, Suit::Black, "d5"),
            (PieceKind::Pawn, Suit::White, "f5"),
            (PieceKind::Rook, Suit::Black, "d4"),
        ]);
        let t = trajectory_of(&board, "e4");
        assert_eq!(t.trajectory, squares(&["e5"]));
        assert_eq!(t.capturing, squares(&["d5"]));
    }

    #[test]
    fn black_pawn_captures_toward_rank_one() {
        let board = board_with(&[
            (PieceKind::Pawn, Suit::Black, "e7"),
            (PieceKind::Knight, Suit::White, "d6"),
            (PieceKind::Bishop, Suit::White, "f6"),
            (PieceKind::Pawn, Suit::White, "e6"),
            (PieceKind::Rook, Suit::White, "d8"),
        ]);
        let t = trajectory_of(&board, "e7");
        assert!(t.trajectory.is_empty());
        assert_eq!(t.capturing, squares(&["d6", "f6"]));
    }

    #[test]
    fn pawn_on_last_rank_is_stuck() {
        let board = board_with(&[(PieceKind::Pawn, Suit::White, "a8")]);
        assert!(trajectory_of(&board, "a8").is_empty());
    }
}
