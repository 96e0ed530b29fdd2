//! Board tests

use classic_tetris::core::{Board, Piece, Position};
use classic_tetris::types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn row_text(board: &Board, y: usize) -> String {
    board
        .row(y)
        .unwrap()
        .iter()
        .map(|c| if c.is_some() { '#' } else { '.' })
        .collect()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(Color::Purple)));
    assert_eq!(board.get(5, 10), Some(Some(Color::Purple)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(Color::Red)));
    assert!(!board.set(0, BOARD_HEIGHT as i32, Some(Color::Red)));
}

#[test]
fn test_is_row_full() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i32 - 1 {
        board.set(x, 19, Some(Color::Red));
    }
    assert!(!board.is_row_full(19));
    board.set(9, 19, Some(Color::Red));
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(99));
}

#[test]
fn test_clear_keeps_height_and_pads_top() {
    let mut board = Board::from_rows(
        &[
            "##########",
            "#.#.#.#.#.",
            "##########",
            "##########",
            ".#.#.#.#.#",
        ],
        Color::Orange,
    );

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 3);
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);

    // Survivors keep their order at the bottom.
    assert_eq!(row_text(&board, 18), "#.#.#.#.#.");
    assert_eq!(row_text(&board, 19), ".#.#.#.#.#");
    assert_eq!(board.filled_count(), 10);
}

#[test]
fn test_merge_skips_cells_outside() {
    let mut board = Board::new();
    // Vertical I overhanging the ceiling.
    let vertical = Piece::new(PieceKind::I).rotated();
    board.merge(&vertical, Position::new(0, -2));
    assert_eq!(board.filled_count(), 2);
    assert_eq!(board.get(0, 0), Some(Some(Color::Cyan)));
    assert_eq!(board.get(0, 1), Some(Some(Color::Cyan)));
}

#[test]
fn test_board_clear() {
    let mut board = Board::from_rows(&["#####....."], Color::Blue);
    board.clear();
    assert_eq!(board.filled_count(), 0);
}
