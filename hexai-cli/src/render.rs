//! Text rendering of the board as a rhombus

use hexai_core::{row_label, Board, Cell, Coord, Player};

use crate::settings::DisplayConfig;

const CELL_WIDTH: usize = 4;

/// Largest board the terminal front end offers (single-letter row labels)
pub const MAX_BOARD_SIZE: usize = 26;

fn glyph(cell: Cell, display: &DisplayConfig) -> char {
    match cell {
        Cell::Empty => display.empty,
        Cell::Owned(Player::Blue) => display.blue,
        Cell::Owned(Player::Red) => display.red,
    }
}

/// Draw the board, each row shifted right by half a cell
///
/// ```text
///      1   2   3
///  A   .   .   .
///    B   .   X   .
///      C   O   .   .
/// ```
pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    let size = board.size();
    let shift = CELL_WIDTH / 2;
    let mut out = String::new();

    out.push_str(&" ".repeat(CELL_WIDTH));
    for col in 0..size {
        out.push_str(&format!("{:^width$}", col + 1, width = CELL_WIDTH));
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    for row in 0..size {
        out.push_str(&" ".repeat(row * shift));
        out.push_str(&format!("{:^width$}", row_label(row), width = CELL_WIDTH));
        for col in 0..size {
            let cell = board.get(Coord::new(row, col)).unwrap_or_default();
            out.push_str(&format!("{:^width$}", glyph(cell, display), width = CELL_WIDTH));
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }

    out
}

/// One-line reminder of who connects which edges
pub fn legend(display: &DisplayConfig) -> String {
    format!(
        "Player 1 Blue ({}) connects left-right, Player 2 Red ({}) connects top-bottom",
        display.blue, display.red
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_shape() {
        let board = Board::from_rows(&["B..", ".R.", "..."]).unwrap();
        let text = render_board(&board, &DisplayConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].trim(), "1   2   3");
        assert_eq!(lines[1], " A   X   .   .");
        assert_eq!(lines[2], "   B   .   O   .");
        assert_eq!(lines[3], "     C   .   .   .");
    }

    #[test]
    fn test_render_custom_glyphs() {
        let board = Board::from_rows(&["BR", ".."]).unwrap();
        let display = DisplayConfig {
            blue: 'b',
            red: 'r',
            empty: '-',
        };
        let text = render_board(&board, &display);
        assert!(text.contains("b   r"));
        assert!(text.contains("-   -"));
        assert!(legend(&display).contains("Blue (b)"));
    }

    #[test]
    fn test_render_two_digit_columns() {
        let board = Board::new(12).unwrap();
        let text = render_board(&board, &DisplayConfig::default());
        let header = text.lines().next().unwrap();
        assert!(header.contains(" 10 "));
        assert!(header.trim_end().ends_with("12"));
        assert!(text.lines().last().unwrap().trim_start().starts_with('L'));
    }

    #[test]
    fn test_largest_offered_board_keeps_single_letters() {
        let board = Board::new(MAX_BOARD_SIZE).unwrap();
        let text = render_board(&board, &DisplayConfig::default());
        assert_eq!(text.lines().count(), MAX_BOARD_SIZE + 1);
        assert!(text.lines().last().unwrap().trim_start().starts_with("Z "));

        // The core goes further; labels widen past Z
        let wide = render_board(&Board::new(MAX_BOARD_SIZE + 1).unwrap(), &DisplayConfig::default());
        assert!(wide.lines().last().unwrap().trim_start().starts_with("AA "));
    }
}
