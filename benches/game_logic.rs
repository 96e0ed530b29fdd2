use criterion::{black_box, criterion_group, criterion_main, Criterion};
use classic_tetris::core::{Board, GameState};
use classic_tetris::engine::Session;
use classic_tetris::types::{Color, Command};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::seeded(12345);
    state.start();

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.start();
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(Color::Cyan));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_start(c: &mut Criterion) {
    let mut state = GameState::seeded(12345);

    c.bench_function("start_game", |b| {
        b.iter(|| {
            state.start();
        })
    });
}

fn bench_move_piece(c: &mut Criterion) {
    let mut state = GameState::seeded(12345);
    state.start();

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            black_box(state.move_piece(1, 0));
            black_box(state.move_piece(-1, 0));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::seeded(12345);
    state.start();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.rotate());
        })
    });
}

fn bench_session_frame(c: &mut Criterion) {
    let mut session = Session::new(GameState::seeded(7));
    session.start();

    c.bench_function("session_frame_16ms", |b| {
        b.iter(|| {
            if !session.is_input_enabled() {
                session.start();
            }
            session.handle_command(black_box(Command::MoveLeft));
            session.advance(16);
            black_box(session.snapshot());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_start,
    bench_move_piece,
    bench_rotate,
    bench_session_frame
);
criterion_main!(benches);
