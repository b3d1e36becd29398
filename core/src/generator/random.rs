use super::*;

/// Uniformly random mine placement, reproducible from its seed.
///
/// Cells are drawn by rejection sampling: a draw that lands on an existing mine is
/// simply retried, so every arrangement of the requested size is equally likely.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Grid {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        let mut grid = Grid::empty(config.size());
        log::debug!(
            "Generating {}x{} board with {} mines, seed {}",
            config.height(),
            config.width(),
            config.mines(),
            self.seed
        );

        // optimize for full boards
        if config.mines() >= total_cells {
            for index in 0..total_cells {
                grid.place_mine(coords_from_index(index, config.width()));
            }
            return grid;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut remaining = config.mines();
        let mut rejected: u64 = 0;
        while remaining > 0 {
            let index: CellCount = rng.random_range(0..total_cells);
            if grid.place_mine(coords_from_index(index, config.width())) {
                remaining -= 1;
            } else {
                rejected += 1;
            }
        }
        log::trace!("Mine placement rejected {} draws", rejected);

        grid
    }
}
