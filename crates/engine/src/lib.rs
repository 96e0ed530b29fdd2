//! Engine module - host-facing driver for the core rules.
//!
//! The core [`GameState`](classic_tetris_core::GameState) has no notion of time or input
//! sources. This crate adds the pieces a host event loop needs:
//!
//! - [`GravityTimer`]: a scheduled-tick abstraction advanced by elapsed milliseconds
//! - [`Session`]: owns the game, the timer and the input gate, and keeps them consistent
//!   across start, level changes, game over and teardown
//!
//! Everything runs on the caller's thread; events are applied strictly in the order the
//! host delivers them.

pub mod session;
pub mod timer;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use session::Session;
pub use timer::GravityTimer;
