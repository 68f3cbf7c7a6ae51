//! Stepping and sliding scans shared by every piece kind.
//!
//! Both scans classify each visited square the same way: empty squares go to
//! the trajectory, enemy squares to the capturing set, friendly squares are
//! dropped. Off-board steps are discarded (stepping) or end the ray (sliding).

use crate::board::board::Board;
use crate::board::direction::Direction;
use crate::board::piece::Trajectory;
use crate::board::position::Position;
use crate::board::suit::Suit;

/// Outcome of looking at one target square.
enum SquareClass {
    Empty,
    Enemy,
    Friendly,
}

#[inline]
fn classify(board: &Board, target: Position, suit: Suit) -> SquareClass {
    match board.piece_at(target) {
        None => SquareClass::Empty,
        Some(piece) if piece.suit() != suit => SquareClass::Enemy,
        Some(_) => SquareClass::Friendly,
    }
}

/// Single-step scan over a fixed offset list (king, knight).
pub fn step_trajectory(
    board: &Board,
    from: Position,
    suit: Suit,
    offsets: &[(i8, i8)],
) -> Trajectory {
    let mut out = Trajectory::new();
    for &(d_file, d_rank) in offsets {
        let Ok(target) = from.offset(d_file, d_rank) else {
            continue;
        };
        match classify(board, target, suit) {
            SquareClass::Empty => {
                out.trajectory.insert(target);
            }
            SquareClass::Enemy => {
                out.capturing.insert(target);
            }
            SquareClass::Friendly => {}
        }
    }
    out
}

/// Ray scan along each direction until the edge or the first occupied square.
pub fn slide_trajectory(
    board: &Board,
    from: Position,
    suit: Suit,
    directions: &[Direction],
) -> Trajectory {
    let mut out = Trajectory::new();
    for &direction in directions {
        let mut cursor = from;
        while let Ok(target) = cursor.move_toward(direction) {
            match classify(board, target, suit) {
                SquareClass::Empty => {
                    out.trajectory.insert(target);
                    cursor = target;
                }
                SquareClass::Enemy => {
                    out.capturing.insert(target);
                    break;
                }
                SquareClass::Friendly => break,
            }
        }
    }
    out
}


#[cfg(test)]
mod tests {
    use super::test_utils::*;
    use super::*;
    use crate::board::direction::ALL_DIRECTIONS;
    use crate::board::piece::PieceKind;

    #[test]
    fn slide_stops_at_first_blocker() {
        let board = board_with(&[
            (PieceKind::Pawn, Suit::Black, "d6"),
            (PieceKind::Pawn, Suit::White, "f4"),
        ]);
        let t = slide_trajectory(&board, sq("d4"), Suit::White, &[Direction::North, Direction::East]);
        assert_eq!(t.trajectory, squares(&["d5", "e4"]));
        assert_eq!(t.capturing, squares(&["d6"]));
    }

    #[test]
    fn step_discards_off_board_offsets() {
        let board = Board::new();
        let offsets: Vec<(i8, i8)> = ALL_DIRECTIONS.iter().map(|d| d.delta()).collect();
        let t = step_trajectory(&board, sq("h8"), Suit::Black, &offsets);
        assert_eq!(t.trajectory, squares(&["g8", "g7", "h7"]));
        assert!(t.capturing.is_empty());
    }
}
