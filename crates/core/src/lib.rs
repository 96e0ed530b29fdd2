//! Core game logic module - pure, synchronous, and testable
//!
//! This module contains all the game rules and state management.
//! It has **no dependencies** on UI, timers, or I/O, which makes it:
//!
//! - **Deterministic** when driven by a seeded or scripted [`PieceSource`]
//! - **Testable**: every rule is a plain method on [`GameState`]
//! - **Portable**: the same state machine runs under a terminal, a GUI or a test
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with row clearing
//! - [`game_state`]: active/next piece, movement, locking, scoring, lifecycle
//! - [`pieces`]: shape matrices and clockwise rotation
//! - [`rng`]: pluggable piece selection
//! - [`scoring`]: line clear points and gravity interval
//! - [`snapshot`]: render contract
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random from the seven kinds
//! - The active piece spawns centered on row 0; a spawn that collides ends the game
//! - Rotation turns the shape matrix clockwise about its top-left corner, no kicks
//! - A blocked downward move locks the piece
//! - Each cleared line scores `100 * level`
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::GameState;
//! use classic_tetris_types::{Command, Phase};
//!
//! let mut game = GameState::seeded(12345);
//! game.start();
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::Rotate);
//! game.tick();
//!
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The core has no clock. A host calls [`GameState::tick`] every
//! [`GameState::tick_interval_ms`] milliseconds (1000ms at level 1, 100ms less per level).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, MoveOutcome};
pub use pieces::{get_shape, Piece, Position, Shape};
pub use rng::{PieceSource, Scripted, UniformRandom};
pub use scoring::{level_tick_interval_ms, line_clear_points, tick_interval_ms};
pub use snapshot::{ActiveSnapshot, GameSnapshot, PieceSnapshot};
