//! Centralized error types for the simulation.
//!
//! Every error here is a construction-time failure. Once a [`crate::game::Game`] exists,
//! rejected actions are silent no-ops rather than errors.

use glam::IVec2;

/// Main error type for the simulation.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Error type for map parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),
    #[error("Board has no rows")]
    EmptyBoard,
    #[error("Row {row} has length {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Board has no spawn marker")]
    MissingSpawn,
    #[error("Board has more than one spawn marker: {first} and {second}")]
    MultipleSpawns { first: IVec2, second: IVec2 },
}

/// Errors related to map validation beyond the raw layout.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("At least one pursuer spawn is required")]
    NoPursuers,

    #[error("Pursuer spawn {0} is outside the board")]
    PursuerSpawnOutOfBounds(IVec2),

    #[error("Pursuer spawn {0} is on a wall")]
    PursuerSpawnOnWall(IVec2),
}

/// Errors related to simulation configuration.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Decision chance must be within [0, 1], got {0}")]
    InvalidChance(f64),

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidMagnitude { name: &'static str, value: f32 },

    #[error("Power duration must be at least one tick")]
    ZeroPowerDuration,

    #[error("Starting lives must be at least one")]
    ZeroLives,
}

/// Result type for simulation operations.
pub type GameResult<T> = Result<T, GameError>;
