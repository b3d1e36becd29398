use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Grid;
}

/// Validates the parameters and builds a board with `generator`.
pub fn generate_board(
    height: Coord,
    width: Coord,
    mine_count: CellCount,
    generator: impl BoardGenerator,
) -> Result<Grid> {
    let config = GameConfig::new(height, width, mine_count)?;
    Ok(generator.generate(config))
}
