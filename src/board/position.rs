use std::fmt;
use std::str::FromStr;

use crate::board::direction::Direction;
use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

/// A square on the 8x8 board. File 0 is `a`, rank 0 is `1`.
///
/// Both coordinates are always in `0..=7`; the only way to build a `Position`
/// is through checked constructors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    file: u8,
    rank: u8,
}

impl Position {
    /// Builds a position from raw indices.
    ///
    /// # Returns
    ///
    /// * `Result<Position, ChessErrors>` - `InvalidFileOrRank` if either index is outside `0..=7`.
    pub fn from_file_rank(file: i16, rank: i16) -> Result<Position, ChessErrors> {
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return Err(ChessErrors::InvalidFileOrRank(file, rank));
        }
        Ok(Position {
            file: file as u8,
            rank: rank as u8,
        })
    }

    /// Parses long algebraic notation such as `"e4"`.
    pub fn from_algebraic(square: &str) -> Result<Position, ChessErrors> {
        algebraic_to_position(square)
    }

    #[inline]
    pub const fn file(&self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Moves one step along `direction`.
    ///
    /// # Returns
    ///
    /// * `Result<Position, ChessErrors>` - `OffBoard` when the step leaves the board.
    pub fn move_toward(&self, direction: Direction) -> Result<Position, ChessErrors> {
        let (d_file, d_rank) = direction.delta();
        self.offset(d_file, d_rank)
    }

    /// Moves a board location by a specified file and rank offset.
    ///
    /// # Arguments
    ///
    /// * `d_file` - The file offset.
    /// * `d_rank` - The rank offset.
    ///
    /// # Returns
    ///
    /// * `Result<Position, ChessErrors>` - Returns the new location if within bounds, otherwise `OffBoard`.
    pub fn offset(&self, d_file: i8, d_rank: i8) -> Result<Position, ChessErrors> {
        let file = self.file as i16 + d_file as i16;
        let rank = self.rank as i16 + d_rank as i16;
        if (file < 0) | (file > 7) | (rank < 0) | (rank > 7) {
            Err(ChessErrors::OffBoard(*self, d_file, d_rank))
        } else {
            Ok(Position {
                file: file as u8,
                rank: rank as u8,
            })
        }
    }

    /// Iterates every square: a1, b1, ..., h1, a2, ..., h8.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Position { file, rank }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&position_to_algebraic(*self))
    }
}

impl FromStr for Position {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::direction::ALL_DIRECTIONS;

    #[test]
    fn move_never_leaves_board() {
        for p in Position::all() {
            for d in ALL_DIRECTIONS {
                match p.move_toward(d) {
                    Ok(q) => {
                        assert!(q.file() < 8 && q.rank() < 8);
                        let (f, r) = d.delta();
                        assert_eq!(q.file() as i8 - p.file() as i8, f);
                        assert_eq!(q.rank() as i8 - p.rank() as i8, r);
                    }
                    Err(e) => assert!(matches!(e, ChessErrors::OffBoard(..))),
                }
            }
        }
    }

    #[test]
    fn corner_moves_fail_outward() {
        let a1 = Position::from_algebraic("a1").unwrap();
        assert!(a1.move_toward(Direction::South).is_err());
        assert!(a1.move_toward(Direction::West).is_err());
        assert!(a1.move_toward(Direction::SouthWest).is_err());
        assert_eq!(
            a1.move_toward(Direction::NorthEast).unwrap(),
            Position::from_algebraic("b2").unwrap()
        );
    }

    #[test]
    fn receiver_is_unchanged() {
        let e4 = Position::from_algebraic("e4").unwrap();
        let _ = e4.move_toward(Direction::North);
        assert_eq!(e4.to_string(), "e4");
    }

    #[test]
    fn raw_constructor_rejects_out_of_range() {
        assert!(Position::from_file_rank(8, 0).is_err());
        assert!(Position::from_file_rank(0, -1).is_err());
        assert!(Position::from_file_rank(7, 7).is_ok());
    }

    #[test]
    fn ordering_is_file_then_rank() {
        let a8 = Position::from_algebraic("a8").unwrap();
        let b1 = Position::from_algebraic("b1").unwrap();
        assert!(a8 < b1);
        assert_eq!(Position::all().count(), 64);
    }
}
