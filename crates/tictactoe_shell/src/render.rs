//! Plain-text rendering of a [`GameView`].

use tictactoe_core::{COLS, GameView, ROWS};

/// Draws the board, one row per line.
///
/// Empty cells show their index so players know what to type; cells of the
/// winning line are bracketed.
pub fn render_board(view: &GameView) -> String {
    let mut out = String::new();
    for row in 0..ROWS {
        let cells: Vec<String> = (0..COLS)
            .map(|col| {
                let index = row * COLS + col;
                let mark = match view.cells[index] {
                    Some(player) => player.to_string(),
                    None => index.to_string(),
                };
                if view.is_highlighted(index) {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row + 1 < ROWS {
            out.push_str("---+---+---\n");
        }
    }
    out
}

/// Draws the move list, marking the selected step.
pub fn render_history(view: &GameView) -> String {
    let mut out = String::new();
    for entry in &view.history {
        let marker = if entry.step == view.step { '>' } else { ' ' };
        out.push_str(&format!("{} {:>2}. {}\n", marker, entry.step, entry.label));
    }
    out
}

/// Draws a full frame: board, status and optionally the move list.
pub fn render(view: &GameView, show_history: bool) -> String {
    let mut out = render_board(view);
    out.push('\n');
    out.push_str(&view.status_text);
    out.push('\n');
    if show_history {
        out.push('\n');
        out.push_str(&render_history(view));
    }
    out
}
