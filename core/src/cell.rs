use serde::{Deserialize, Serialize};

/// One board position. The explored and marked flags are kept exclusive by the
/// exploration and marking code, not by this type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_explored: bool,
    pub is_marked: bool,
}

impl Cell {
    /// Neither explored nor marked.
    pub const fn is_hidden(self) -> bool {
        !self.is_explored && !self.is_marked
    }
}

/// Player-visible state of a cell, as handed to a renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Marked,
    Explored(u8),
    /// Only produced once the game is over.
    Mine,
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
