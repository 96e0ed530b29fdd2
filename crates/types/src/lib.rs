//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! by the rules engine, the session driver and the terminal front end alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn**: row 0, horizontally centered on the piece's bounding box
//!
//! # Gravity by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | ... | -100ms per level |
//! | 9 | 200ms |
//! | 10+ | 100ms floor (not reachable from the level selector) |
//!
//! # Examples
//!
//! ```
//! use classic_tetris_types::{Command, Level, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Command::from_str("softDrop"), Some(Command::SoftDrop));
//! assert_eq!(Command::from_str("hardDrop"), None);
//!
//! assert_eq!(Level::new(3).unwrap().get(), 3);
//! assert!(Level::new(0).is_err());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_TICK_MS: u32 = 1000;

/// Gravity speed-up per level above 1
pub const TICK_STEP_MS: u32 = 100;

/// Fastest gravity interval
pub const MIN_TICK_MS: u32 = 100;

/// Points per cleared line, multiplied by level
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Lowest selectable level
pub const MIN_LEVEL: u8 = 1;

/// Highest selectable level
pub const MAX_LEVEL: u8 = 9;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in declaration order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use classic_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Color a piece of this kind paints into the board when it locks.
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Purple,
            PieceKind::Z => Color::Red,
        }
    }
}

/// Color identifier stored in locked board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Filled by a locked piece of that color
pub type Cell = Option<Color>;

/// Player commands accepted by the game
///
/// The game is command based; key bindings live in the input crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one row down, locking it if blocked
    SoftDrop,
    /// Rotate piece 90° clockwise about its bounding box
    Rotate,
}

impl Command {
    /// Parse a command name (case-insensitive). Unknown names yield `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
        }
    }
}

/// Game difficulty, constrained to `MIN_LEVEL..=MAX_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(MIN_LEVEL);
    pub const MAX: Level = Level(MAX_LEVEL);

    pub fn new(value: u8) -> Result<Self, LevelError> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&value) {
            Ok(Level(value))
        } else {
            Err(LevelError::OutOfRange)
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::MIN
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a level selection was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    OutOfRange,
    GameInProgress,
}

impl LevelError {
    pub fn code(self) -> &'static str {
        match self {
            LevelError::OutOfRange => "level_out_of_range",
            LevelError::GameInProgress => "game_in_progress",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            LevelError::OutOfRange => "level must be between 1 and 9",
            LevelError::GameInProgress => "level cannot change while a game is in progress",
        }
    }
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LevelError {}

/// Lifecycle of a game: NotStarted -> Playing -> GameOver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Playing,
    GameOver,
}

/// Emitted after a piece locks into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    /// The piece spawned after this lock collided immediately.
    pub topped_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_bounds() {
        assert_eq!(Level::new(MIN_LEVEL), Ok(Level::MIN));
        assert_eq!(Level::new(MAX_LEVEL), Ok(Level::MAX));
        assert_eq!(Level::new(0), Err(LevelError::OutOfRange));
        assert_eq!(Level::new(10), Err(LevelError::OutOfRange));
        assert_eq!(Level::default().get(), 1);
    }

    #[test]
    fn piece_colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
        assert_eq!(PieceKind::T.color().as_str(), "purple");
    }

    #[test]
    fn command_names_round_trip() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("pause"), None);
    }

    #[test]
    fn level_error_codes() {
        assert_eq!(LevelError::GameInProgress.code(), "game_in_progress");
        assert_eq!(
            LevelError::OutOfRange.to_string(),
            "level must be between 1 and 9"
        );
    }
}
