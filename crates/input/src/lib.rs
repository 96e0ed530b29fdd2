//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`] values for the game and
//! [`HostAction`]s for the surrounding loop (start, level select, quit). The game itself
//! only ever sees commands.

pub mod map;

pub use classic_tetris_types as types;

pub use map::{handle_key_event, map_key, should_quit, HostAction};
