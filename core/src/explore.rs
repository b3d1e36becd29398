use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The target was a mine, nothing was changed.
    HitMine,
    /// Cells newly explored by this reveal, in the order they were opened.
    Revealed(Vec<Coord2>),
}

impl RevealOutcome {
    pub const fn is_mine_hit(&self) -> bool {
        matches!(self, Self::HitMine)
    }
}

/// Explores `coords` and, when it has no adjacent mines, floods outward through every
/// connected zero cell plus the numbered ring around them.
///
/// Marked cells are never opened by the flood. The target itself must be neither
/// explored nor marked.
pub fn reveal(grid: &mut Grid, coords: Coord2) -> Result<RevealOutcome> {
    let coords = grid.validate_coords(coords)?;
    let target = grid[coords];
    if target.is_explored {
        return Err(MoveError::AlreadyExplored(coords).into());
    }
    if target.is_marked {
        return Err(MoveError::Marked(coords).into());
    }
    if target.is_mine {
        return Ok(RevealOutcome::HitMine);
    }

    let mut opened = Vec::new();
    let mut to_visit = VecDeque::from([coords]);
    while let Some(visit_coords) = to_visit.pop_front() {
        // duplicates can be queued by two zero cells sharing a neighbor
        if !grid[visit_coords].is_hidden() {
            continue;
        }

        grid.cell_mut(visit_coords).is_explored = true;
        opened.push(visit_coords);

        let count = grid.adjacent_mine_count(visit_coords);
        log::trace!("Explored {:?}, adjacent mines: {}", visit_coords, count);
        if count == 0 {
            let hidden_neighbors: Vec<_> = grid
                .iter_neighbors(visit_coords)
                .filter(|&pos| grid[pos].is_hidden())
                .collect();
            to_visit.extend(hidden_neighbors);
        }
    }

    log::debug!("Reveal at {:?} explored {} cells", coords, opened.len());
    Ok(RevealOutcome::Revealed(opened))
}
