use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Fixed-size board of cells addressed by `(row, col)`.
///
/// The mine layout is set once when the grid is built; afterwards only the explored
/// and marked flags change. Only serialized: the mine count is derived from the cells
/// when the grid is built, never read back.
///
/// ```compile_fail
/// let grid: sweeper_core::Grid = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Grid {
    /// Grid of the given size with no mines yet, for generators to fill in.
    pub(crate) fn empty((height, width): Coord2) -> Self {
        Self {
            cells: Array2::default((height, width).to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }

        let mut grid = Self::empty(size);
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(ConfigError::MineOutOfBounds(coords).into());
            }
            grid.place_mine(coords);
        }

        if grid.mine_count == 0 {
            return Err(ConfigError::NoMines.into());
        }
        Ok(grid)
    }

    /// Puts a mine on `coords`, returning `false` if one was already there.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine {
            return false;
        }
        cell.is_mine = true;
        self.mine_count += 1;
        true
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (height, width) = self.size();
        if coords.0 < height && coords.1 < width {
            Ok(coords)
        } else {
            Err(MoveError::OutOfBounds(coords).into())
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine
    }

    /// Number of mines among the in-bounds neighbors of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors, so the count always fits
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// All cells with their coordinates, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn explored_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_explored)
    }

    pub fn marked_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_marked)
    }

    /// True when the marked cells are exactly the mine cells, position by position.
    pub fn marks_match_mines(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_marked == cell.is_mine)
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|cell| predicate(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
