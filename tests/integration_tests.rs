//! Integration tests for the game lifecycle

use classic_tetris::core::{GameState, MoveOutcome, PieceSource, Scripted};
use classic_tetris::types::{Color, Command, Level, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn scripted(kinds: &[PieceKind]) -> GameState<Scripted> {
    GameState::with_source(Scripted::new(kinds.to_vec()))
}

/// Soft drop the active piece until it locks.
fn drop_piece<S: PieceSource>(state: &mut GameState<S>) {
    while state.apply_command(Command::SoftDrop) {
        if state.take_last_event().is_some() {
            return;
        }
    }
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::seeded(12345);
    assert_eq!(state.phase(), Phase::NotStarted);

    state.start();
    assert_eq!(state.phase(), Phase::Playing);
    assert!(state.started());
    assert!(!state.game_over());
    assert!(state.active().is_some());
    assert!(state.next_piece().is_some());
    assert_eq!(state.score(), 0);
    assert_eq!(state.board().filled_count(), 0);

    let active = state.active().unwrap();
    let pos = state.position();
    assert_eq!(pos.y, 0);
    assert_eq!(
        pos.x,
        BOARD_WIDTH as i32 / 2 - active.shape().width() as i32 / 2
    );
}

#[test]
fn test_seeded_games_are_reproducible() {
    let mut a = GameState::seeded(99);
    let mut b = GameState::seeded(99);
    a.start();
    b.start();
    for _ in 0..10 {
        assert_eq!(a.active(), b.active());
        assert_eq!(a.next_piece(), b.next_piece());
        drop_piece(&mut a);
        drop_piece(&mut b);
    }
}

#[test]
fn test_gravity_never_overlaps_board() {
    let mut state = GameState::seeded(2024);
    state.start();

    for _ in 0..2000 {
        if state.game_over() {
            break;
        }
        let outcome = state.tick();
        assert_ne!(outcome, MoveOutcome::Blocked);
        if !state.game_over() {
            let active = state.active().unwrap();
            assert!(
                !state.is_colliding(&active, state.position()),
                "active piece overlaps after {:?}",
                outcome
            );
        }
    }
}

#[test]
fn test_stacking_until_game_over() {
    let mut state = scripted(&[PieceKind::O]);
    state.start();

    let mut locks = 0;
    while !state.game_over() {
        drop_piece(&mut state);
        locks += 1;
        assert!(locks <= 10, "expected top-out");
    }
    // O pieces stack two rows at a time in columns 4-5.
    assert_eq!(locks, 10);
    assert_eq!(state.board().filled_count(), 40);

    // Frozen.
    let before = state.snapshot();
    for command in [Command::MoveLeft, Command::MoveRight, Command::SoftDrop, Command::Rotate] {
        assert!(!state.apply_command(command));
    }
    assert_eq!(state.tick(), MoveOutcome::Inactive);
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_full_line_clear_via_play() {
    // Five O pieces side by side fill two rows.
    let mut state = scripted(&[PieceKind::O]);
    state.set_level(Level::new(3).unwrap()).unwrap();
    state.start();

    for shift in [-4i32, -2, 0, 2, 4] {
        let command = if shift < 0 { Command::MoveLeft } else { Command::MoveRight };
        for _ in 0..shift.abs() {
            assert!(state.apply_command(command));
        }
        drop_piece(&mut state);
    }

    assert_eq!(state.lines(), 2);
    assert_eq!(state.score(), 600);
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn test_partial_row_does_not_score() {
    let mut state = scripted(&[PieceKind::I]);
    state.start();
    drop_piece(&mut state);

    assert_eq!(state.score(), 0);
    assert_eq!(state.clear_lines(), 0);
    assert_eq!(state.score(), 0);
    let bottom = state.board().row(BOARD_HEIGHT as usize - 1).unwrap();
    assert_eq!(bottom.iter().filter(|c| **c == Some(Color::Cyan)).count(), 4);
}

#[test]
fn test_wall_blocks_horizontal_moves() {
    let mut state = scripted(&[PieceKind::T]);
    state.start();

    let mut moved = 0;
    while state.apply_command(Command::MoveLeft) {
        moved += 1;
    }
    assert_eq!(moved, 4);
    assert_eq!(state.position().x, 0);
    assert_eq!(state.move_piece(-1, 0), MoveOutcome::Blocked);
}

#[test]
fn test_rotation_against_wall_is_rejected() {
    let mut state = scripted(&[PieceKind::I]);
    state.start();
    // Stand the I up, push it to the right wall, then try to lay it down again.
    assert!(state.apply_command(Command::Rotate));
    while state.apply_command(Command::MoveRight) {}
    assert_eq!(state.position().x, 9);

    let before = state.active();
    assert!(!state.apply_command(Command::Rotate));
    assert_eq!(state.active(), before);
}

#[test]
fn test_level_selection_rules() {
    let mut state = scripted(&[PieceKind::T]);
    assert!(state.set_level(Level::new(9).unwrap()).is_ok());
    assert_eq!(state.tick_interval_ms(), 200);

    state.start();
    assert!(state.set_level(Level::MIN).is_err());
    assert_eq!(state.level(), Level::MAX);
}
