use thiserror::Error;

use crate::{CellCount, Coord2};

/// Rejected board parameters; no board is built when one of these is returned.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board height and width must be greater than 0")]
    EmptyBoard,
    #[error("At least one mine is required")]
    NoMines,
    #[error("Too many mines, requested {requested} but only {capacity} cells")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Mine at {0:?} is outside the board")]
    MineOutOfBounds(Coord2),
}

/// Rejected command; the game is left exactly as it was.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Cell {0:?} is not on the board")]
    OutOfBounds(Coord2),
    #[error("Cell {0:?} is already explored")]
    AlreadyExplored(Coord2),
    #[error("Cell {0:?} is marked, unmark it first")]
    Marked(Coord2),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
    #[error(transparent)]
    InvalidMove(#[from] MoveError),
}

impl GameError {
    /// Whether the caller can simply ask for another command.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidMove(_))
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
