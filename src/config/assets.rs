//! Asset path lookup from the `assets` section of the configuration.
//!
//! Only paths are resolved here; loading images is the renderer's business.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::board::piece::PieceKind;
use crate::board::suit::Suit;
use crate::config::config_errors::ConfigErrors;
use crate::config::json_reader::{JsonKind, NestedValue};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetTable {
    board: Option<PathBuf>,
    pieces: BTreeMap<(Suit, PieceKind), PathBuf>,
}

impl AssetTable {
    /// Reads `{ "board": path, "pieces": { suit: { kind: path } } }`.
    ///
    /// Both keys are optional; unknown suit or kind names abort setup.
    pub fn from_json(assets: &NestedValue<'_>) -> Result<Self, ConfigErrors> {
        assets.expect_kind(JsonKind::Object)?;
        let mut table = AssetTable::default();

        if let Some(board) = assets.try_get("board") {
            table.board = Some(PathBuf::from(board.as_str()?));
        }

        if let Some(pieces) = assets.try_get("pieces") {
            pieces.expect_kind(JsonKind::Object)?;
            for (suit_name, kinds) in pieces.object() {
                kinds.expect_kind(JsonKind::Object)?;
                let suit = Suit::from_name(&suit_name).ok_or_else(|| ConfigErrors::InvalidLayout {
                    path: kinds.path().to_owned(),
                    reason: format!("unknown suit \"{suit_name}\""),
                })?;
                for (kind_name, path) in kinds.object() {
                    let kind =
                        PieceKind::from_name(&kind_name).ok_or_else(|| ConfigErrors::InvalidLayout {
                            path: path.path().to_owned(),
                            reason: format!("unknown piece kind \"{kind_name}\""),
                        })?;
                    table
                        .pieces
                        .insert((suit, kind), PathBuf::from(path.as_str()?));
                }
            }
        }

        Ok(table)
    }

    pub fn board_asset(&self) -> Option<&Path> {
        self.board.as_deref()
    }

    pub fn piece_asset(&self, suit: Suit, kind: PieceKind) -> Option<&Path> {
        self.pieces.get(&(suit, kind)).map(PathBuf::as_path)
    }
}
