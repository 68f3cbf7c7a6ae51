//! Board setup read from the configuration document.
//!
//! Two forms are accepted inside the `board` object and may be combined:
//! - `layout`: eight row strings, rank 8 first. Uppercase letters are White,
//!   lowercase Black, `.`/space is an empty square and a digit skips that many
//!   files.
//! - `pieces`: explicit `{ "kind", "suit", "square" }` entries, placed after
//!   the layout rows.

use tracing::info;

use crate::board::board::Board;
use crate::board::piece::PieceKind;
use crate::board::position::Position;
use crate::board::suit::Suit;
use crate::config::config_errors::ConfigErrors;
use crate::config::json_reader::{JsonKind, NestedValue};

pub const STANDARD_LAYOUT: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP", "RNBQKBNR",
];

/// One piece to put on the board during setup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub kind: PieceKind,
    pub suit: Suit,
    pub position: Position,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardLayout {
    placements: Vec<Placement>,
}

impl BoardLayout {
    /// The usual chess starting position.
    pub fn standard() -> Self {
        BoardLayout::from_rows(STANDARD_LAYOUT).expect("standard layout rows should always parse")
    }

    pub fn from_rows<'r>(rows: impl IntoIterator<Item = &'r str>) -> Result<Self, ConfigErrors> {
        let mut layout = BoardLayout::default();
        layout.push_rows(rows, "$")?;
        Ok(layout)
    }

    pub fn from_placements(placements: Vec<Placement>) -> Self {
        BoardLayout { placements }
    }

    /// Reads the `board` object of the configuration document.
    pub fn from_json(board: &NestedValue<'_>) -> Result<Self, ConfigErrors> {
        board.expect_kind(JsonKind::Object)?;
        let mut layout = BoardLayout::default();

        if let Some(rows) = board.try_get("layout") {
            rows.expect_kind(JsonKind::Array)?;
            let mut strings = Vec::with_capacity(rows.length());
            for row in rows.elements() {
                strings.push(row.as_str()?);
            }
            layout.push_rows(strings, rows.path())?;
        }

        if let Some(pieces) = board.try_get("pieces") {
            pieces.expect_kind(JsonKind::Array)?;
            for entry in pieces.elements() {
                layout.placements.push(parse_entry(&entry)?);
            }
        }

        Ok(layout)
    }

    fn push_rows<'r>(
        &mut self,
        rows: impl IntoIterator<Item = &'r str>,
        path: &str,
    ) -> Result<(), ConfigErrors> {
        let rows: Vec<&str> = rows.into_iter().collect();
        if rows.len() != 8 {
            return Err(ConfigErrors::InvalidLayout {
                path: path.to_owned(),
                reason: format!("layout must contain 8 rows, found {}", rows.len()),
            });
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let rank = 7 - row_idx as i16;
            let mut file: i16 = 0;
            let invalid = |reason: String| ConfigErrors::InvalidLayout {
                path: format!("{path}[{row_idx}]"),
                reason,
            };

            for ch in row.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(invalid(format!("invalid empty-square count '{ch}'")));
                    }
                    file += skip as i16;
                    continue;
                }
                if ch == '.' || ch == ' ' {
                    file += 1;
                    continue;
                }
                let (kind, suit) = PieceKind::from_char(ch)
                    .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
                if file >= 8 {
                    return Err(invalid("row has too many files".to_owned()));
                }
                self.placements.push(Placement {
                    kind,
                    suit,
                    position: Position::from_file_rank(file, rank)?,
                });
                file += 1;
            }

            if file != 8 {
                return Err(invalid(format!("row spans {file} files instead of 8")));
            }
        }
        Ok(())
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Creates a board holding every placement; two pieces on one square abort setup.
    pub fn build_board(&self) -> Result<Board, ConfigErrors> {
        let mut board = Board::new();
        for p in &self.placements {
            board.place_piece(p.kind, p.suit, p.position)?;
        }
        info!(pieces = self.placements.len(), "board set up from layout");
        Ok(board)
    }
}

fn parse_entry(entry: &NestedValue<'_>) -> Result<Placement, ConfigErrors> {
    let invalid = |reason: String| ConfigErrors::InvalidLayout {
        path: entry.path().to_owned(),
        reason,
    };

    let kind_name = entry.get("kind")?.as_str()?;
    let kind = PieceKind::from_name(kind_name)
        .ok_or_else(|| invalid(format!("unknown piece kind \"{kind_name}\"")))?;
    let suit_name = entry.get("suit")?.as_str()?;
    let suit =
        Suit::from_name(suit_name).ok_or_else(|| invalid(format!("unknown suit \"{suit_name}\"")))?;
    let square = entry.get("square")?.as_str()?;
    let position = Position::from_algebraic(square)?;

    Ok(Placement {
        kind,
        suit,
        position,
    })
}
