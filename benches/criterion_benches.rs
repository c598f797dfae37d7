use std::fs;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sokoban_engine::solver::{solve_bfs, solve_iterative_deepening};
use sokoban_engine::state::State;

fn load(path: &str) -> State {
    fs::read_to_string(path).unwrap().parse().unwrap()
}

fn bench_two_crates_bfs(c: &mut Criterion) {
    let initial = load("levels/03-two-crates.txt");
    c.bench_function("two crates bfs", |b| {
        b.iter(|| black_box(solve_bfs(black_box(&initial), None)))
    });
}

fn bench_two_crates_deepening(c: &mut Criterion) {
    let initial = load("levels/03-two-crates.txt");
    c.bench_function("two crates iterative deepening", |b| {
        b.iter(|| black_box(solve_iterative_deepening(black_box(&initial), 20)))
    });
}

criterion_group!(benches, bench_two_crates_bfs, bench_two_crates_deepening);
criterion_main!(benches);
