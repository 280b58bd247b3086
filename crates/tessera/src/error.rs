//! # Game Error Types
//!
//! Everything here is fatal to the session; the binary logs it and exits.

use std::convert::Infallible;

use tessera_procedural::ProceduralError;
use thiserror::Error;

/// Errors that can occur while running a session.
#[derive(Error, Debug)]
pub enum GameError {
    /// Terrain generation or lookup failed.
    #[error(transparent)]
    Procedural(#[from] ProceduralError),

    /// Configuration could not be parsed or failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading the config file or writing a frame failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Inventory slot index past the end.
    #[error("inventory slot {slot} out of range (inventory has {len} slots)")]
    SlotOutOfRange {
        /// Requested slot.
        slot: usize,
        /// Number of slots.
        len: usize,
    },
}

impl From<Infallible> for GameError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<toml::de::Error> for GameError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GameError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
