use std::fmt;

/// Represents the side (color) a piece belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Moves first; pawns advance toward rank 8.
    White,
    /// Pawns advance toward rank 1.
    Black,
}

impl Suit {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Suit::White => 0,
            Suit::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Suit::White => Suit::Black,
            Suit::Black => Suit::White,
        }
    }

    /// Rank delta of a pawn's forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Suit::White => 1,
            Suit::Black => -1,
        }
    }

    /// Rank index pawns of this suit start on.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Suit::White => 1,
            Suit::Black => 6,
        }
    }

    /// Parses a configuration spelling, ignoring case: `"white"`/`"w"`/`"light"`
    /// or `"black"`/`"b"`/`"dark"`.
    pub fn from_name(name: &str) -> Option<Suit> {
        match name.trim().to_ascii_lowercase().as_str() {
            "white" | "w" | "light" => Some(Suit::White),
            "black" | "b" | "dark" => Some(Suit::Black),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::White => "white",
            Suit::Black => "black",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
