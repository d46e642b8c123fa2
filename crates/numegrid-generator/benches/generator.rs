//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures the full generation pipeline (diagonal seeding, backtracking
//! completion, masking) per difficulty level.
//!
//! # Test Data
//!
//! Uses three fixed seeds so runs are reproducible while still covering
//! multiple cases; each seed produces a different solution grid.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use numegrid_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "8d0c5f3ab4a1e6972e5d8c0f1a3b6e4d7c9f2a5b8e1d4c7f0a3b6e9d2c5f8a1b",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate_guided(c: &mut Criterion) {
    bench_difficulty(c, "generate_guided", Difficulty::Guided);
}

fn bench_generate_medium(c: &mut Criterion) {
    bench_difficulty(c, "generate_medium", Difficulty::Medium);
}

fn bench_generate_master(c: &mut Criterion) {
    bench_difficulty(c, "generate_master", Difficulty::Master);
}

fn bench_difficulty(c: &mut Criterion, name: &str, difficulty: Difficulty) {
    let generator = PuzzleGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(BenchmarkId::new(name, format!("seed_{i}")), &seed, |b, seed| {
            b.iter_batched(
                || hint::black_box(*seed),
                |seed| generator.generate_with_seed(difficulty, seed),
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generate_guided,
        bench_generate_medium,
        bench_generate_master
);
criterion_main!(benches);
