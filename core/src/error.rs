use thiserror::Error;

use crate::Coord;

/// Failures of the light surface. None of these are recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("No controller matching {0:?} found")]
    DeviceNotFound(String),
    #[error("Could not initialize controller backend: {0}")]
    Init(String),
    #[error("Could not connect to controller: {0}")]
    Connect(String),
    #[error("Could not send to controller: {0}")]
    Send(String),
    #[error("Controller disconnected")]
    Disconnected,
}

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Could not read puzzle dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed puzzle dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Puzzle cell ({x}, {y}) is outside the playfield")]
    OutOfBounds { x: Coord, y: Coord },
    #[error("Puzzle dataset contains no puzzles")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

pub type Result<T> = core::result::Result<T, GameError>;
