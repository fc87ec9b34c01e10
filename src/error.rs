//! Centralized error types for Sneaky Cat.
//!
//! Nothing here is raised during a tick. Errors are produced while building a
//! level or loading tuning data, so bad input fails before the first frame.

use std::io;

/// Main error type for the crate.
#[derive(thiserror::Error, Debug)]
pub enum SneakError {
    #[error("Level error: {0}")]
    Level(#[from] LevelError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Problems with level layout data.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LevelError {
    #[error("Human {human} has no waypoints")]
    EmptyWaypoints { human: usize },

    #[error("Human {human}: {reason}")]
    InvalidHuman { human: usize, reason: String },

    #[error("Obstacle {index} has a malformed hit region: {reason}")]
    MalformedObstacle { index: usize, reason: String },

    #[error("Exit {index} has a malformed region: {reason}")]
    MalformedExit { index: usize, reason: String },

    #[error("Cat start ({x}, {y}) is outside the world bounds")]
    SpawnOutOfBounds { x: f32, y: f32 },

    #[error("Cat start ({x}, {y}) overlaps obstacle {obstacle}")]
    SpawnBlocked { x: f32, y: f32, obstacle: usize },

    #[error("Non-finite value in {0}")]
    NonFinite(&'static str),

    #[error("Level cannot run with this tuning: {0}")]
    InvalidTuning(String),
}

/// Problems loading or validating tuning data.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// Result type for crate operations.
pub type SneakResult<T> = Result<T, SneakError>;
