//! Text rendering of board snapshots.
//!
//! The renderer is a consumer of the engine's read-only surface: board
//! dimensions plus the occupied-cell iterator. Row 0 is drawn at the top,
//! matching the engine's orientation, with a column ruler underneath.

use connect_core::{GameState, Player};

const ANSI_RED: &str = "\x1b[31m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_RESET: &str = "\x1b[0m";

/// Render a state as a multi-line string.
///
/// Pieces are drawn as colored discs when `color` is set, plain letters
/// otherwise (for pipes and logs).
pub fn render(state: &GameState, color: bool) -> String {
    let board = state.board();
    let mut grid = vec![vec!['.'; board.cols()]; board.rows()];
    for (row, col, player) in board.occupied() {
        grid[row][col] = match player {
            Player::Red => 'R',
            Player::Yellow => 'Y',
        };
    }

    let mut out = String::new();
    for row in grid {
        out.push('|');
        for cell in row {
            match (cell, color) {
                ('R', true) => {
                    out.push_str(ANSI_RED);
                    out.push('O');
                    out.push_str(ANSI_RESET);
                }
                ('Y', true) => {
                    out.push_str(ANSI_YELLOW);
                    out.push('O');
                    out.push_str(ANSI_RESET);
                }
                (c, _) => out.push(c),
            }
            out.push('|');
        }
        out.push('\n');
    }
    // Column ruler
    out.push(' ');
    for col in 0..board.cols() {
        out.push_str(&format!("{} ", col % 10));
    }
    out.push('\n');
    out
}

/// One-line verdict for a state
pub fn verdict(state: &GameState) -> String {
    match state.winner() {
        Some(Player::Red) => "Red wins".to_string(),
        Some(Player::Yellow) => "Yellow wins".to_string(),
        None if state.is_final() => "Draw".to_string(),
        None => format!("{:?} to move", state.current_player()),
    }
}
