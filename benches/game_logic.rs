use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{clear_full_rows, Board, GameConfig, GameSession};
use blockfall::types::{Coord, Rgb, TICK_MS};

fn session() -> GameSession {
    let mut session = GameSession::new(GameConfig {
        seed: Some(12345),
        ..GameConfig::default()
    });
    session.start();
    session
}

fn bench_tick(c: &mut Criterion) {
    let mut state = session();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if !state.is_running() {
                state.start();
            }
            state.tick(black_box(TICK_MS));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let gray = Rgb::new(128, 128, 128);
    let full: Board = (16..20)
        .flat_map(|row| (0..10).map(move |col| (Coord::new(col, row), gray)))
        .chain((0..16).map(|row| (Coord::new(row % 10, row), gray)))
        .collect();

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = full.clone();
            black_box(clear_full_rows(&mut board));
        })
    });
}

fn bench_render_grid(c: &mut Criterion) {
    let state = session();

    c.bench_function("render_grid", |b| {
        b.iter(|| black_box(state.render_grid()))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = session();
    let mut right = true;

    c.bench_function("move", |b| {
        b.iter(|| {
            let moved = if right {
                state.move_right()
            } else {
                state.move_left()
            };
            if !moved {
                right = !right;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = session();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_render_grid,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
