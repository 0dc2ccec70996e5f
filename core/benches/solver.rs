//! Benchmarks for the solver and the press/render path.
//!
//! Run with: cargo bench -p lightspad-core

use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use lightspad_core::{
    Engine, EngineConfig, Grid, PuzzleStore, RecordingSurface, iter_cells, solve, to_physical,
};

fn bench_solve_builtin(c: &mut Criterion) {
    let grids: Vec<Grid> = PuzzleStore::builtin().iter().map(Grid::from_puzzle).collect();

    c.bench_function("solve_builtin", |b| {
        b.iter(|| {
            for grid in &grids {
                black_box(solve(black_box(grid)));
            }
        });
    });
}

fn bench_press_every_cell(c: &mut Criterion) {
    c.bench_function("grid_press_every_cell", |b| {
        let mut grid = Grid::new();
        b.iter(|| {
            for coords in iter_cells() {
                grid.press(black_box(coords));
            }
        });
    });
}

fn bench_engine_handle_press(c: &mut Criterion) {
    let config = EngineConfig {
        animation_step: Duration::ZERO,
        ..Default::default()
    };

    c.bench_function("engine_handle_press", |b| {
        let mut engine =
            Engine::new(RecordingSurface::new(), PuzzleStore::builtin(), config).unwrap();
        b.iter(|| {
            engine.surface_mut().clear_commands();
            // pressing the same cell twice never solves a builtin puzzle
            black_box(engine.handle_press(to_physical((0, 0))).unwrap());
            black_box(engine.handle_press(to_physical((0, 0))).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_solve_builtin,
    bench_press_every_cell,
    bench_engine_handle_press,
);
criterion_main!(benches);
