use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs to draw the board, without access to hidden mines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    pub state: GameState,
    pub mines: CellCount,
    pub mines_left: isize,
    pub triggered_mine: Option<Coord2>,
    pub cells: Array2<CellView>,
}

impl BoardSnapshot {
    pub fn from_game(game: &Game) -> Self {
        let size = game.size();
        let mut cells = Array2::from_elem(size.to_nd_index(), CellView::Hidden);

        let (row_end, col_end) = size;
        for row in 0..row_end {
            for col in 0..col_end {
                let coords = (row, col);
                cells[coords.to_nd_index()] = game.cell_view(coords);
            }
        }

        Self {
            size,
            state: game.state(),
            mines: game.total_mines(),
            mines_left: game.mines_left(),
            triggered_mine: game.triggered_mine(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::new(Grid::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn maps_explored_and_marked_cells() {
        let mut game = game((2, 2), &[(0, 0)]);
        game.reveal((1, 1)).unwrap();
        game.toggle_mark((0, 1)).unwrap();

        let snapshot = game.snapshot();

        assert_eq!(snapshot.state, GameState::InProgress);
        assert_eq!(snapshot.mines, 1);
        assert_eq!(snapshot.mines_left, 0);
        assert_eq!(snapshot.cell((0, 0)), CellView::Hidden);
        assert_eq!(snapshot.cell((0, 1)), CellView::Marked);
        assert_eq!(snapshot.cell((1, 0)), CellView::Hidden);
        assert_eq!(snapshot.cell((1, 1)), CellView::Explored(1));
    }

    #[test]
    fn mines_only_appear_after_the_game_ends() {
        let mut game = game((2, 3), &[(0, 0), (1, 2)]);
        game.toggle_mark((1, 2)).unwrap();

        let playing = game.snapshot();
        assert!(playing.cells.iter().all(|view| *view != CellView::Mine));

        game.reveal((0, 0)).unwrap();
        let lost = game.snapshot();
        assert_eq!(lost.state, GameState::Lost);
        assert_eq!(lost.triggered_mine, Some((0, 0)));
        assert_eq!(lost.cell((0, 0)), CellView::Mine);
        assert_eq!(lost.cell((1, 2)), CellView::Mine);
        assert_eq!(lost.cell((0, 1)), CellView::Hidden);
    }

    #[test]
    fn serializes_for_external_renderers() {
        let mut game = game((1, 2), &[(0, 1)]);
        game.reveal((0, 0)).unwrap();

        let json = serde_json::to_value(game.snapshot()).unwrap();

        assert_eq!(json["state"], "InProgress");
        assert_eq!(json["mines"], 1);
        assert_eq!(json["triggered_mine"], serde_json::Value::Null);

        let back: BoardSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, game.snapshot());
    }
}
