//! Board representation and four-in-a-row detection.
//!
//! This module contains:
//! - Cell values (empty or occupied by a player)
//! - The dense row-major grid with bottom-up gravity
//! - Column height and availability queries
//! - The four-direction winner scan

use crate::player::Player;
use serde::{Deserialize, Serialize};

/// Number of rows in the standard board
pub const STANDARD_ROWS: usize = 6;

/// Number of columns in the standard board
pub const STANDARD_COLS: usize = 7;

/// Run length required to win
const WIN_LENGTH: usize = 4;

/// Contents of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Cell {
    /// No piece
    #[default]
    Empty,
    /// A piece belonging to a player
    Piece(Player),
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Piece(p) => Some(*p),
        }
    }

    /// Numeric encoding: 0 for empty, -1/+1 for the players
    pub fn value(&self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Piece(p) => p.value(),
        }
    }
}

/// A fixed-size grid of cells.
///
/// Row 0 is the top of the board, row `rows - 1` the bottom; gravity fills
/// columns from the bottom row upward. Dimensions are carried by the value
/// rather than hardcoded, so non-standard grids work everywhere the
/// standard one does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cell storage, `rows * cols` entries
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board dimensions must be non-zero");
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Create an empty board with the standard 6x7 dimensions
    pub fn standard() -> Self {
        Self::new(STANDARD_ROWS, STANDARD_COLS)
    }

    /// Create a board from row-major cell values, copying the caller's buffer.
    ///
    /// Legality of the position (contiguous columns, balanced piece counts)
    /// is not validated; callers supplying hand-built positions are trusted.
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty or ragged.
    pub fn from_rows(rows: &[&[Cell]]) -> Self {
        assert!(!rows.is_empty(), "Board must have at least one row");
        let cols = rows[0].len();
        assert!(cols > 0, "Board must have at least one column");
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "All rows must have the same length"
        );

        Self {
            rows: rows.len(),
            cols,
            cells: rows.iter().flat_map(|r| r.iter().copied()).collect(),
        }
    }

    // ==================== Query Methods ====================

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at (row, col); row 0 is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols, "Cell out of bounds");
        self.cells[row * self.cols + col]
    }

    /// Count of occupied cells per column, left to right
    pub fn heights(&self) -> Vec<usize> {
        (0..self.cols)
            .map(|col| {
                (0..self.rows)
                    .filter(|&row| self.get(row, col) != Cell::Empty)
                    .count()
            })
            .collect()
    }

    /// Whether the column can still accept a piece (its top cell is empty)
    pub fn is_column_free(&self, col: usize) -> bool {
        self.get(0, col) == Cell::Empty
    }

    /// Columns that can still accept a piece, in ascending order
    pub fn free_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&c| self.is_column_free(c)).collect()
    }

    /// Whether no empty cell remains anywhere
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Iterate over occupied cells as `(row, col, player)`.
    ///
    /// This is the read-only surface rendering collaborators consume; the
    /// engine itself has no rendering dependency.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Player)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.player().map(|p| (i / self.cols, i % self.cols, p)))
    }

    // ==================== Mutation Methods ====================

    /// Place a piece at the lowest empty row of a column and return that row.
    ///
    /// Callers must have checked that the column is in range and free;
    /// `GameState::transition` is the only production caller.
    pub(crate) fn drop_piece(&mut self, col: usize, player: Player) -> usize {
        debug_assert!(col < self.cols && self.is_column_free(col));
        let height = (0..self.rows)
            .filter(|&row| self.get(row, col) != Cell::Empty)
            .count();
        let row = self.rows - 1 - height;
        self.cells[row * self.cols + col] = Cell::Piece(player);
        row
    }

    // ==================== Winner Scan ====================

    /// Find four equal pieces in a row, column, or diagonal.
    ///
    /// Directions are scanned in a fixed order (horizontal, vertical,
    /// diagonal, anti-diagonal), each top-to-bottom then left-to-right, and
    /// the first qualifying run decides. In a legally reached position at
    /// most one player can have a run, so the winner value is unambiguous.
    pub fn winner(&self) -> Option<Player> {
        // Horizontal
        for row in 0..self.rows {
            for col in 0..self.cols.saturating_sub(WIN_LENGTH - 1) {
                if let Some(p) = self.run_at(row, col, 0, 1) {
                    return Some(p);
                }
            }
        }

        // Vertical
        for row in 0..self.rows.saturating_sub(WIN_LENGTH - 1) {
            for col in 0..self.cols {
                if let Some(p) = self.run_at(row, col, 1, 0) {
                    return Some(p);
                }
            }
        }

        // Diagonal, top-left to bottom-right
        for row in 0..self.rows.saturating_sub(WIN_LENGTH - 1) {
            for col in 0..self.cols.saturating_sub(WIN_LENGTH - 1) {
                if let Some(p) = self.run_at(row, col, 1, 1) {
                    return Some(p);
                }
            }
        }

        // Anti-diagonal, top-right to bottom-left
        for row in 0..self.rows.saturating_sub(WIN_LENGTH - 1) {
            for col in (WIN_LENGTH - 1)..self.cols {
                if let Some(p) = self.run_at(row, col, 1, -1) {
                    return Some(p);
                }
            }
        }

        None
    }

    /// Check the 4-cell kernel starting at an anchor known to be in bounds
    fn run_at(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<Player> {
        let first = self.get(row, col).player()?;
        for step in 1..WIN_LENGTH as isize {
            let r = (row as isize + dr * step) as usize;
            let c = (col as isize + dc * step) as usize;
            if self.get(r, c).player() != Some(first) {
                return None;
            }
        }
        Some(first)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const R: Cell = Cell::Piece(Player::Red);
    const Y: Cell = Cell::Piece(Player::Yellow);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_standard_board_is_empty_6x7() {
        let board = Board::standard();
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 7);
        assert_eq!(board.heights(), vec![0; 7]);
        assert_eq!(board.free_columns(), (0..7).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_from_rows_copies_the_buffer() {
        let bottom = [E, E, E, R, E, E, E];
        let empty = [E; 7];
        let board = Board::from_rows(&[&empty, &empty, &empty, &empty, &empty, &bottom]);
        assert_eq!(board.get(5, 3), R);
        assert_eq!(board.heights()[3], 1);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_from_rows_rejects_ragged_input() {
        Board::from_rows(&[&[E, E], &[E]]);
    }

    #[test]
    fn test_heights_and_free_agree() {
        let mut board = Board::standard();
        for _ in 0..board.rows() {
            board.drop_piece(2, Player::Red);
        }
        let heights = board.heights();
        for col in 0..board.cols() {
            assert_eq!(board.is_column_free(col), heights[col] < board.rows());
        }
        assert_eq!(board.free_columns(), vec![0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_drop_piece_fills_bottom_up() {
        let mut board = Board::standard();
        assert_eq!(board.drop_piece(3, Player::Red), 5);
        assert_eq!(board.drop_piece(3, Player::Yellow), 4);
        assert_eq!(board.get(5, 3), R);
        assert_eq!(board.get(4, 3), Y);
        assert_eq!(board.get(3, 3), E);
    }

    #[test]
    fn test_horizontal_win_bottom_row() {
        let mut board = Board::standard();
        for col in 0..4 {
            board.drop_piece(col, Player::Red);
        }
        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::standard();
        for _ in 0..4 {
            board.drop_piece(6, Player::Yellow);
        }
        assert_eq!(board.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_diagonal_win() {
        // Red climbs the down-right diagonal from (2, 0) to (5, 3)
        let mut board = Board::standard();
        board.drop_piece(3, Player::Red);
        board.drop_piece(2, Player::Yellow);
        board.drop_piece(2, Player::Red);
        board.drop_piece(1, Player::Yellow);
        board.drop_piece(1, Player::Yellow);
        board.drop_piece(1, Player::Red);
        board.drop_piece(0, Player::Yellow);
        board.drop_piece(0, Player::Yellow);
        board.drop_piece(0, Player::Yellow);
        board.drop_piece(0, Player::Red);
        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_anti_diagonal_win() {
        // Yellow climbs the down-left diagonal from (2, 5) to (5, 2)
        let mut board = Board::standard();
        board.drop_piece(2, Player::Yellow);
        board.drop_piece(3, Player::Red);
        board.drop_piece(3, Player::Yellow);
        board.drop_piece(4, Player::Red);
        board.drop_piece(4, Player::Red);
        board.drop_piece(4, Player::Yellow);
        board.drop_piece(5, Player::Red);
        board.drop_piece(5, Player::Red);
        board.drop_piece(5, Player::Red);
        board.drop_piece(5, Player::Yellow);
        assert_eq!(board.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.drop_piece(col, Player::Red);
        }
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_full_board_without_run_has_no_winner() {
        let board = full_draw_board();
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_occupied_reports_coordinates_and_players() {
        let mut board = Board::standard();
        board.drop_piece(0, Player::Red);
        board.drop_piece(6, Player::Yellow);
        let mut occupied: Vec<_> = board.occupied().collect();
        occupied.sort();
        assert_eq!(occupied, vec![(5, 0, Player::Red), (5, 6, Player::Yellow)]);
    }

    #[test]
    fn test_non_standard_dimensions() {
        let mut board = Board::new(4, 5);
        assert_eq!(board.heights(), vec![0; 5]);
        for _ in 0..4 {
            board.drop_piece(1, Player::Red);
        }
        assert!(!board.is_column_free(1));
        assert_eq!(board.winner(), Some(Player::Red));
    }

    /// A full board with no four-in-a-row in any direction.
    ///
    /// Columns alternate players upward from a bottom-row pattern of
    /// R R Y Y R R Y; that pattern has no alternating window of four
    /// columns, which rules out diagonal runs as well as horizontal and
    /// vertical ones.
    fn full_draw_board() -> Board {
        let mut board = Board::standard();
        let bottom = [
            Player::Red,
            Player::Red,
            Player::Yellow,
            Player::Yellow,
            Player::Red,
            Player::Red,
            Player::Yellow,
        ];
        for (col, &start) in bottom.iter().enumerate() {
            let mut player = start;
            for _ in 0..board.rows() {
                board.drop_piece(col, player);
                player = player.opponent();
            }
        }
        board
    }
}
