//! Core game state machine.
//!
//! `GameState` is an immutable snapshot of a board plus whose turn it is.
//! The only state-producing operation is `transition`, which returns a new
//! state and never mutates its receiver; caller-held references form the
//! implicit game tree.

use crate::actions::GameAction;
use crate::board::Board;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when applying a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    /// The move was rejected: the column is full or out of range, the input
    /// was malformed, or the game is already over.
    #[error("invalid move: column is full, out of range, or game is over")]
    InvalidMove,
}

/// An immutable snapshot of a game in progress.
///
/// States are value types: `transition` copies the board, places one piece,
/// and wraps the result in a fresh state. Parent and child share no mutable
/// structure, so states can be held, compared, and shared freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Start a game on an empty standard board, Red to move
    pub fn new() -> Self {
        Self::with_start(Player::default())
    }

    /// Start a game on an empty standard board with the given starting player
    pub fn with_start(current_player: Player) -> Self {
        Self {
            board: Board::standard(),
            current_player,
        }
    }

    /// Resume from an existing position.
    ///
    /// The board is taken by value, so no caller-held buffer can alias the
    /// constructed state. Legality of the position is not validated; the
    /// caller is trusted (same contract as `Board::from_rows`).
    pub fn from_board(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
        }
    }

    // ==================== Query Methods ====================

    /// The board snapshot (read-only; rendering collaborators consume this)
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Count of occupied cells per column, left to right
    pub fn heights(&self) -> Vec<usize> {
        self.board.heights()
    }

    /// Whether the column can still accept a piece
    pub fn is_column_free(&self, col: usize) -> bool {
        col < self.board.cols() && self.board.is_column_free(col)
    }

    /// Columns that can still accept a piece, in ascending order
    pub fn free_columns(&self) -> Vec<usize> {
        self.board.free_columns()
    }

    /// Whether the action is legal in this state.
    ///
    /// Total over any action: malformed input, out-of-range columns, full
    /// columns, and moves in a terminal state all answer `false` rather
    /// than failing. Terminal states are absorbing; nothing is applicable
    /// once `is_final` holds.
    pub fn is_applicable(&self, action: GameAction) -> bool {
        if self.is_final() {
            return false;
        }
        match action {
            GameAction::Drop(col) => self.is_column_free(col),
            GameAction::Malformed => false,
        }
    }

    /// The player with four in a row, if any
    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    /// Whether the game is over: a winner exists or the board is full.
    ///
    /// Deliberately a disjunction, not a draw test. Callers classify the
    /// outcome by combining this with `winner`: a winner means a decisive
    /// game, `is_final` without a winner means a draw.
    pub fn is_final(&self) -> bool {
        self.winner().is_some() || self.board.is_full()
    }

    // ==================== Transition ====================

    /// Apply a move, producing the successor state.
    ///
    /// The legality check is re-derived here rather than trusting an earlier
    /// `is_applicable` probe, so a stale probe can never corrupt a state.
    /// On success the piece lands on the lowest empty row of the column and
    /// the turn passes to the opponent; the receiver is left untouched.
    pub fn transition(&self, action: GameAction) -> Result<GameState, GameError> {
        if !self.is_applicable(action) {
            return Err(GameError::InvalidMove);
        }
        // is_applicable only passes well-formed drops
        let col = action.column().ok_or(GameError::InvalidMove)?;

        let mut board = self.board.clone();
        board.drop_piece(col, self.current_player);

        Ok(GameState {
            board,
            current_player: self.current_player.opponent(),
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
