//! Top-level configuration: where the document lives and what setup reads from it.
//!
//! Every section sits under the `chesspp` root object. Absent sections fall
//! back to defaults; sections of the wrong JSON kind abort setup.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::board::board::Board;
use crate::config::assets::AssetTable;
use crate::config::board_layout::BoardLayout;
use crate::config::config_errors::ConfigErrors;
use crate::config::json_reader::{JsonKind, JsonReader};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "CHESSPP_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/chesspp.json";
/// Top-level key every configuration document is nested under.
pub const ROOT_KEY: &str = "chesspp";

/// Everything setup needs from the configuration document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub layout: BoardLayout,
    pub assets: AssetTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameConfig {
    /// Standard starting position with no assets configured.
    pub fn standard() -> Self {
        GameConfig {
            layout: BoardLayout::standard(),
            assets: AssetTable::default(),
        }
    }

    /// Picks the configuration path: explicit argument, then `CHESSPP_CONFIG`, then the default.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigErrors> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading configuration");
        Self::from_reader(&JsonReader::from_path(path)?)
    }

    /// Reads `chesspp.board` and `chesspp.assets`.
    ///
    /// A missing `board` section falls back to the standard layout; a
    /// missing `assets` section leaves the table empty.
    pub fn from_reader(reader: &JsonReader) -> Result<Self, ConfigErrors> {
        let root = reader.access().get(ROOT_KEY)?;
        root.expect_kind(JsonKind::Object)?;

        let layout = match root.try_get("board") {
            Some(board) => BoardLayout::from_json(&board)?,
            None => {
                debug!("no board section, using the standard layout");
                BoardLayout::standard()
            }
        };
        let assets = match root.try_get("assets") {
            Some(assets) => AssetTable::from_json(&assets)?,
            None => AssetTable::default(),
        };

        Ok(GameConfig { layout, assets })
    }

    pub fn build_board(&self) -> Result<Board, ConfigErrors> {
        self.layout.build_board()
    }
}
