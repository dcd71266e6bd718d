use std::path::PathBuf;

use crate::game::MoveError;

/// Errors surfaced by the engine facade.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("unknown algorithm '{0}', expected one of: minimax, alphabeta, expected, expected_prune")]
    UnknownAlgorithm(String),
}

/// Errors that can occur when parsing a board from its marker-grid form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("board must have 6 rows, got {0}")]
    RowCount(usize),

    #[error("row {row} must have 7 markers, got {width}")]
    RowWidth { row: usize, width: usize },

    #[error("unknown marker '{marker}' at row {row}, column {col}")]
    UnknownMarker { row: usize, col: usize, marker: char },

    #[error("empty cell below a piece at row {row}, column {col}")]
    FloatingPiece { row: usize, col: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
