//! Connect Four rules engine.
//!
//! This crate provides the core game logic for Connect Four:
//! - A dense row-major board with bottom-up gravity
//! - Immutable game states with a copy-on-transition state machine
//! - Legal-move queries that are total over arbitrary driver input
//! - Four-direction win detection and terminal-state classification
//!
//! # Architecture
//!
//! The engine is a pure value library: no I/O, no randomness, no rendering.
//! Drivers hold a [`game::GameState`], query its legal columns, and call
//! [`game::GameState::transition`] to obtain the successor; renderers consume
//! the read-only board accessors. States share no mutable structure, so they
//! are safe to hold across threads without synchronization.
//!
//! # Modules
//!
//! - [`board`]: the grid, column queries, and the winner scan
//! - [`player`]: player tags and the -1/0/+1 numeric encoding
//! - [`actions`]: tagged driver input (column drop or malformed)
//! - [`game`]: the immutable state machine

pub mod actions;
pub mod board;
pub mod game;
pub mod player;

// Re-export commonly used types
pub use actions::GameAction;
pub use board::{Board, Cell, STANDARD_COLS, STANDARD_ROWS};
pub use game::{GameError, GameState};
pub use player::Player;
