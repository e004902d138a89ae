use thiserror::Error;

use crate::{CellCount, Coord, Seed};

/// Rejected board configuration.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board width must be at least 2, got {0}")]
    InvalidWidth(Coord),
    #[error("Board height must be at least 2, got {0}")]
    InvalidHeight(Coord),
    #[error("Board needs at least one mine")]
    NoMines,
    #[error("Too many mines, requested {mines} but the board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Seed must be positive, got {0}")]
    NonPositiveSeed(Seed),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: i32, y: i32 },
    #[error("Board has fewer than 2 rows or columns")]
    DegenerateBoard,
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
