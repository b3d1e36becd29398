use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    Marked,
    Unmarked,
}

/// Flips the mark on an unexplored cell. Explored cells cannot be marked.
pub fn toggle_mark(grid: &mut Grid, coords: Coord2) -> Result<MarkOutcome> {
    let coords = grid.validate_coords(coords)?;
    let cell = grid.cell_mut(coords);
    if cell.is_explored {
        return Err(MoveError::AlreadyExplored(coords).into());
    }

    cell.is_marked = !cell.is_marked;
    Ok(if cell.is_marked {
        MarkOutcome::Marked
    } else {
        MarkOutcome::Unmarked
    })
}
