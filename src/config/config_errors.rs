//! Errors raised while reading the JSON configuration and building a board from it.
//!
//! Every variant aborts setup; there is no partial recovery of a broken
//! configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::chess_errors::ChessErrors;
use crate::config::json_reader::JsonKind;

#[derive(Debug, Error)]
pub enum ConfigErrors {
    /// The configuration file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("error loading JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{path}: no key \"{key}\"")]
    MissingKey { path: String, key: String },

    #[error("{path}: index {index} out of range for array of length {length}")]
    IndexOutOfRange {
        path: String,
        index: usize,
        length: usize,
    },

    #[error("{path}: expected {expected}, found {found}")]
    WrongKind {
        path: String,
        expected: JsonKind,
        found: JsonKind,
    },

    #[error("{0}: no parent json value")]
    NoParent(String),

    #[error("{path}: value {value} does not fit the requested integer type")]
    NumberOutOfRange { path: String, value: String },

    /// The board layout section is structurally valid JSON but not a valid layout.
    #[error("{path}: {reason}")]
    InvalidLayout { path: String, reason: String },

    /// Placing a configured piece failed (for example two pieces on one square).
    #[error("board setup failed: {0}")]
    Board(#[from] ChessErrors),
}
