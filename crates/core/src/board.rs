//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of a locked piece.
//! Uses a flat array so the grid never allocates and its dimensions can never change.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::{Piece, Position};
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by a single clear, bottom to top
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Row-major cells (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i32 || y < 0 || y >= BOARD_HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (x, y), or `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a piece cell may sit at (x, y).
    ///
    /// Rows above the top edge are open so a shape can overhang the ceiling;
    /// the side walls and the floor are solid.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
            return false;
        }
        y < 0 || !self.is_occupied(x, y)
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Borrow row `y`, or `None` when out of bounds
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Remove every full row and pad the top with empty rows.
    ///
    /// Remaining rows keep their relative order. Two-pointer compaction, no allocation.
    /// Returns the cleared row indices, bottom to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Write every filled cell of `piece` at `pos` into the board using the piece's color.
    ///
    /// Cells that fall outside the grid are skipped.
    pub fn merge(&mut self, piece: &Piece, pos: Position) {
        let color = piece.color();
        for (dx, dy) in piece.shape().filled() {
            self.set(pos.x + dx, pos.y + dy, Some(color));
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a fixed-size 2D array (row-major).
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Build a board from text rows (top to bottom); `.` is empty, anything else filled.
    ///
    /// Short input is padded with empty rows at the top so `rows` describes the bottom of
    /// the board.
    pub fn from_rows(rows: &[&str], color: Color) -> Self {
        let mut board = Self::new();
        let offset = (BOARD_HEIGHT as usize).saturating_sub(rows.len());
        for (i, line) in rows.iter().enumerate().take(BOARD_HEIGHT as usize) {
            for (x, ch) in line.chars().enumerate().take(BOARD_WIDTH as usize) {
                if ch != '.' {
                    board.set(x as i32, (offset + i) as i32, Some(color));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_is_open_walls_floor_and_ceiling() {
        let mut board = Board::new();
        assert!(board.is_open(0, 0));
        assert!(board.is_open(4, -3));
        assert!(!board.is_open(-1, 5));
        assert!(!board.is_open(10, 5));
        assert!(!board.is_open(3, 20));

        board.set(3, 19, Some(Color::Red));
        assert!(!board.is_open(3, 19));
    }

    #[test]
    fn test_clear_full_rows_preserves_order() {
        let mut board = Board::from_rows(
            &[
                "#.........", // 16
                "##########", // 17
                "..#.......", // 18
                "##########", // 19
            ],
            Color::Blue,
        );

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        // The two survivors shift down, keeping their order.
        assert!(board.is_occupied(0, 18));
        assert!(board.is_occupied(2, 19));
        assert_eq!(board.filled_count(), 2);
        assert!(board.rows().take(18).all(|r| r.iter().all(|c| c.is_none())));
    }

    #[test]
    fn test_clear_full_rows_noop_without_full_rows() {
        let mut board = Board::from_rows(&["#########."], Color::Green);
        let before = board.clone();
        assert!(board.clear_full_rows().is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_merge_uses_piece_color() {
        let mut board = Board::new();
        let piece = Piece::new(PieceKind::O);
        board.merge(&piece, Position::new(4, 18));

        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(board.get(x, y), Some(Some(Color::Yellow)));
        }
        assert_eq!(board.filled_count(), 4);
    }

    #[test]
    fn test_write_grid() {
        let mut board = Board::new();
        board.set(9, 19, Some(Color::Cyan));
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_grid(&mut grid);
        assert_eq!(grid[19][9], Some(Color::Cyan));
        assert_eq!(grid[0][0], None);
    }
}
