//! Crate-wide error type.
//!
//! Everything that can stop the game ends up here: bad level data, missing
//! art, unreadable config files and SDL failures. There is no recovery path
//! inside a frame, so callers just propagate with `?`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// A level id was requested that the level table does not contain
    #[error("unknown level id: {0}")]
    UnknownLevel(String),

    /// The level table parsed but is internally inconsistent
    #[error("invalid level table: {0}")]
    InvalidLevelTable(String),

    /// A sprite key could not be resolved by the asset provider
    #[error("missing sprite '{key}': {reason}")]
    MissingSprite { key: String, reason: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// SDL2 reports most failures as plain strings
    #[error("SDL error: {0}")]
    Sdl(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    /// Wraps any displayable SDL error (window/canvas builders use their own types).
    pub fn sdl(error: impl std::fmt::Display) -> Self {
        GameError::Sdl(error.to_string())
    }
}
