use std::path::PathBuf;

use crate::game::PlayerId;

/// Errors that reject a drop attempt.
///
/// All of these are recoverable: the game state the move was attempted on is
/// left exactly as it was, so callers can surface the error or treat the
/// move as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range for a board {width} wide")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised while setting up a new game, never during play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a game needs at least 2 players, got {count}")]
    NotEnoughPlayers { count: usize },

    #[error("board dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("player id {0} appears more than once in the roster")]
    DuplicatePlayerId(PlayerId),
}

/// Rejected player color input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("colors must be a 6 digit hex value like \"#ff00ff\", got {0:?}")]
pub struct ParseColorError(pub String);

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

    #[error("invalid game setup: {0}")]
    Setup(#[from] SetupError),
}
