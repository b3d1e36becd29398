#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use explore::*;
pub use generator::*;
pub use grid::*;
pub use mark::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod explore;
mod generator;
mod grid;
mod mark;
mod snapshot;
mod types;

/// Validated board parameters.
///
/// Only [`GameConfig::new`] builds one, so a generator never sees an empty board or more
/// mines than cells:
///
/// ```compile_fail
/// let config = sweeper_core::GameConfig::new_unchecked(2, 2, 5);
/// ```
///
/// ```compile_fail
/// let config = sweeper_core::GameConfig { height: 3, width: 3, mines: 0 };
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    height: Coord,
    width: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(height: Coord, width: Coord, mines: CellCount) -> Self {
        Self {
            height,
            width,
            mines,
        }
    }

    pub fn new(height: Coord, width: Coord, mines: CellCount) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }
        if mines == 0 {
            return Err(ConfigError::NoMines.into());
        }
        let capacity = mult(height, width);
        if mines > capacity {
            return Err(ConfigError::TooManyMines {
                requested: mines,
                capacity,
            }
            .into());
        }
        Ok(Self::new_unchecked(height, width, mines))
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.height, self.width)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal,
    Mark,
}

/// A move that has already been tokenized into board coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub coords: Coord2,
    pub action: Action,
}

impl Command {
    pub const fn reveal(coords: Coord2) -> Self {
        Self {
            coords,
            action: Action::Reveal,
        }
    }

    pub const fn mark(coords: Coord2) -> Self {
        Self {
            coords,
            action: Action::Mark,
        }
    }
}
