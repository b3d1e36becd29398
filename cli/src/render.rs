use std::fmt::Write;

use sweeper_core::{BoardSnapshot, CellView};

fn symbol(view: CellView) -> String {
    match view {
        CellView::Hidden => ".".to_owned(),
        CellView::Marked => "*".to_owned(),
        CellView::Explored(0) => "/".to_owned(),
        CellView::Explored(count) => count.to_string(),
        CellView::Mine => "X".to_owned(),
    }
}

/// Draws the board as text with 1-based row and column labels.
pub fn render(snapshot: &BoardSnapshot) -> String {
    let (height, width) = snapshot.size;
    let unit = height.to_string().len().max(width.to_string().len()) + 1;
    let rule = format!("{}|{}|\n", "-".repeat(unit), "-".repeat(unit * usize::from(width)));

    let mut out = String::new();
    out.push_str(&" ".repeat(unit));
    out.push('|');
    for col in 1..=width {
        let _ = write!(out, "{col:>unit$}");
    }
    out.push_str("|\n");
    out.push_str(&rule);

    for (row, cells) in snapshot.cells.rows().into_iter().enumerate() {
        let _ = write!(out, "{:>unit$}|", row + 1);
        for &view in cells {
            let _ = write!(out, "{:>unit$}", symbol(view));
        }
        out.push_str("|\n");
    }
    out.push_str(&rule);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{Game, Grid};

    fn game(size: (u16, u16), mines: &[(u16, u16)]) -> Game {
        Game::new(Grid::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn draws_hidden_marked_and_counted_cells() {
        let mut game = game((2, 2), &[(0, 0)]);
        game.reveal((1, 1)).unwrap();
        game.toggle_mark((0, 1)).unwrap();

        let expected = "  | 1 2|\n\
                        --|----|\n 1| . *|\n 2| . 1|\n--|----|\n";
        assert_eq!(render(&game.snapshot()), expected);
    }

    #[test]
    fn draws_empty_cells_and_mines_after_a_loss() {
        let mut game = game((1, 3), &[(0, 2)]);
        game.reveal((0, 0)).unwrap();
        game.reveal((0, 2)).unwrap();

        let expected = "  | 1 2 3|\n--|------|\n 1| / 1 X|\n--|------|\n";
        assert_eq!(render(&game.snapshot()), expected);
    }

    #[test]
    fn widens_columns_for_two_digit_labels() {
        let game = game((10, 2), &[(9, 1)]);

        let text = render(&game.snapshot());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "   |  1  2|");
        assert_eq!(lines[1], "---|------|");
        assert_eq!(lines[2], "  1|  .  .|");
        assert_eq!(lines[11], " 10|  .  .|");
        assert_eq!(lines.len(), 13);
    }
}
