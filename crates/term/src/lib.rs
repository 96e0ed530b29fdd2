//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. Snapshots are drawn into a framebuffer,
//! which is then flushed to the terminal with diffing.
//!
//! - Keep `core` free of presentation concerns
//! - Draw board cells two columns wide to offset the terminal glyph aspect ratio
//! - Keep view code pure so it can be tested without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
