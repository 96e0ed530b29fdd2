use crate::pieces::{Piece, Shape};
use crate::types::{Cell, Color, Level, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// A piece as seen by a renderer: kind, color and current shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub color: Color,
    pub shape: Shape,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.color(),
            shape: *value.shape(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub piece: PieceSnapshot,
    pub x: i32,
    pub y: i32,
}

impl ActiveSnapshot {
    /// Whether the active piece covers board cell (x, y).
    pub fn covers(&self, x: i32, y: i32) -> bool {
        let (sx, sy) = (x - self.x, y - self.y);
        sx >= 0 && sy >= 0 && self.piece.shape.is_filled(sx as usize, sy as usize)
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub score: u32,
    pub level: Level,
    pub lines: u32,
    pub started: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.next = None;
        self.score = 0;
        self.level = Level::default();
        self.lines = 0;
        self.started = false;
        self.game_over = false;
    }

    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::NotStarted
        } else if self.game_over {
            Phase::GameOver
        } else {
            Phase::Playing
        }
    }

    pub fn playable(&self) -> bool {
        self.phase() == Phase::Playing
    }

    /// Cell color with the active piece drawn over the locked board.
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        if let Some(active) = self.active {
            if active.covers(x, y) {
                return Some(active.piece.color);
            }
        }
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
            return None;
        }
        self.board[y as usize][x as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            score: 0,
            level: Level::default(),
            lines: 0,
            started: false,
            game_over: false,
        }
    }
}
