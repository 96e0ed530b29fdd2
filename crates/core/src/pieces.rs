//! Pieces module - tetromino shape matrices and rotation
//!
//! Each piece is a small boolean matrix (at most 4x4) anchored at its top-left corner.
//! Rotation is a plain matrix rotation: transpose, then reverse each row. It pivots
//! around the bounding box origin rather than a center cell, so the I piece and the
//! three-wide pieces shift visibly when turned. There are no wall kicks.

use crate::types::{Color, PieceKind, BOARD_WIDTH};

/// Largest side of any shape matrix
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of the shape's top-left corner on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Boolean shape matrix with its own width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    width: u8,
    height: u8,
}

impl Shape {
    /// Build a shape from 0/1 rows. Rows must all have the same length.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len().min(MAX_SHAPE_SIZE);
        let width = rows.first().map_or(0, |r| r.len()).min(MAX_SHAPE_SIZE);
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().take(height).enumerate() {
            for (x, &v) in row.iter().take(width).enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            cells,
            width: width as u8,
            height: height as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether (x, y) inside the matrix is filled. Outside the matrix is empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.cells[y][x]
    }

    /// Iterate filled cells as (dx, dy) offsets from the top-left corner.
    pub fn filled(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.height as usize).flat_map(move |y| {
            (0..self.width as usize)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i32, y as i32))
        })
    }

    /// Rows of the matrix as 0/1 values (top to bottom).
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells[..self.height as usize]
            .iter()
            .map(move |row| &row[..self.width as usize])
    }

    /// 90° clockwise: transpose, then reverse each row.
    ///
    /// `rotated[i][j] = self[h - 1 - j][i]`; the result is `h` wide and `w` tall.
    pub fn rotated_cw(&self) -> Self {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, row) in cells.iter_mut().enumerate().take(w) {
            for (j, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - j][i];
            }
        }
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }
}

/// Canonical spawn matrix for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

/// A piece: kind (which fixes its color) plus its current shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    shape: Shape,
}

impl Piece {
    /// New piece in its canonical orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Copy of this piece with its shape turned 90° clockwise
    pub fn rotated(&self) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape.rotated_cw(),
        }
    }

    /// Row 0, horizontally centered: `WIDTH / 2 - shape_width / 2`
    pub fn spawn_position(&self) -> Position {
        let x = (BOARD_WIDTH as i32) / 2 - (self.shape.width() as i32) / 2;
        Position::new(x, 0)
    }
}
