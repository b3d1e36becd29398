use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    /// Every mine, and nothing else, is marked
    Won,
    /// A mine was revealed
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Represents a game from start to finish
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Game {
    grid: Grid,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Game {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn generate(config: GameConfig, generator: impl BoardGenerator) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.grid.mine_count()
    }

    /// How many mines have not been marked yet, negative when there are too many marks
    pub fn mines_left(&self) -> isize {
        (self.grid.mine_count() as isize) - (self.grid.marked_count() as isize)
    }

    pub fn explored_count(&self) -> CellCount {
        self.grid.explored_count()
    }

    pub fn marked_count(&self) -> CellCount {
        self.grid.marked_count()
    }

    /// The mine that ended the game, only set after a loss
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// What the player is allowed to see at `coords`; mines only show up once the game is over.
    pub fn cell_view(&self, coords: Coord2) -> CellView {
        let cell = self.grid[coords];
        if cell.is_mine && self.state.is_finished() {
            CellView::Mine
        } else if cell.is_marked {
            CellView::Marked
        } else if cell.is_explored {
            CellView::Explored(self.grid.adjacent_mine_count(coords))
        } else {
            CellView::Hidden
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_game(self)
    }

    /// Runs one command to completion and returns the resulting state.
    pub fn apply(&mut self, command: Command) -> Result<GameState> {
        match command.action {
            Action::Reveal => {
                self.reveal(command.coords)?;
            }
            Action::Mark => {
                self.toggle_mark(command.coords)?;
            }
        }
        Ok(self.state)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.check_in_progress()?;

        let outcome = crate::explore::reveal(&mut self.grid, coords)?;
        if outcome.is_mine_hit() {
            self.triggered_mine = Some(coords);
            self.end_game(false);
        } else {
            self.check_win();
        }
        Ok(outcome)
    }

    pub fn toggle_mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.check_in_progress()?;

        let outcome = crate::mark::toggle_mark(&mut self.grid, coords)?;
        self.check_win();
        Ok(outcome)
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(MoveError::AlreadyEnded.into())
        } else {
            Ok(())
        }
    }

    fn check_win(&mut self) {
        if self.grid.marks_match_mines() {
            self.end_game(true);
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            GameState::Won
        } else {
            GameState::Lost
        };
        match self.triggered_mine {
            Some(coords) if !won => log::debug!("Game lost at {:?}", coords),
            _ => log::debug!("Game won with {} mines marked", self.grid.mine_count()),
        }
    }
}
