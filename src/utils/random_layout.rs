//! Random board layouts for fuzz-style tests and benchmarks.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::piece::ALL_PIECE_KINDS;
use crate::board::position::Position;
use crate::board::suit::Suit;
use crate::config::board_layout::{BoardLayout, Placement};

/// Scatters `count` pieces (at most 64) of random kind and suit over distinct squares.
pub fn random_placements<R: Rng>(rng: &mut R, count: usize) -> Vec<Placement> {
    let mut squares: Vec<Position> = Position::all().collect();
    squares.shuffle(rng);
    squares
        .into_iter()
        .take(count)
        .map(|position| Placement {
            kind: ALL_PIECE_KINDS[rng.random_range(0..ALL_PIECE_KINDS.len())],
            suit: if rng.random_bool(0.5) {
                Suit::White
            } else {
                Suit::Black
            },
            position,
        })
        .collect()
}

pub fn random_layout<R: Rng>(rng: &mut R, count: usize) -> BoardLayout {
    BoardLayout::from_placements(random_placements(rng, count))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn placements_use_distinct_squares() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 16, 64, 100] {
            let placements = random_placements(&mut rng, count);
            assert_eq!(placements.len(), count.min(64));
            let board = BoardLayout::from_placements(placements).build_board().unwrap();
            assert_eq!(board.active_pieces().count(), count.min(64));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = random_layout(&mut StdRng::seed_from_u64(42), 20);
        let b = random_layout(&mut StdRng::seed_from_u64(42), 20);
        assert_eq!(a, b);
    }
}
