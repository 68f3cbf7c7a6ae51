//! Compass directions and their coordinate deltas.
//!
//! The table is plain `const` data shared by every piece kind.

/// One of the eight compass points. North is toward rank 8, East toward file h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// `(d_file, d_rank)` per direction, indexed by `Direction::index`.
pub const DIRECTION_VECTORS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthWest,
];

impl Direction {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::NorthEast => 1,
            Direction::East => 2,
            Direction::SouthEast => 3,
            Direction::South => 4,
            Direction::SouthWest => 5,
            Direction::West => 6,
            Direction::NorthWest => 7,
        }
    }

    /// Unit vector `(d_file, d_rank)` for this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        DIRECTION_VECTORS[self.index()]
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        ALL_DIRECTIONS[(self.index() + 4) % 8]
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let (d_file, d_rank) = self.delta();
        d_file != 0 && d_rank != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_vectors_are_unit_steps() {
        for d in ALL_DIRECTIONS {
            let (f, r) = d.delta();
            assert!((-1..=1).contains(&f) && (-1..=1).contains(&r));
            assert!((f, r) != (0, 0));
        }
    }

    #[test]
    fn opposite_negates_vector() {
        for d in ALL_DIRECTIONS {
            let (f, r) = d.delta();
            assert_eq!(d.opposite().delta(), (-f, -r));
        }
    }

    #[test]
    fn orthogonal_and_diagonal_partition_compass() {
        assert!(ORTHOGONAL_DIRECTIONS.iter().all(|d| !d.is_diagonal()));
        assert!(DIAGONAL_DIRECTIONS.iter().all(|d| d.is_diagonal()));
    }
}
