use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hint::black_box;
use sweeper_core::*;

const TIERS: [(&str, GameConfig); 3] = [
    ("classic", GameConfig::new_unchecked(14, 18, 40)),
    ("large", GameConfig::new_unchecked(100, 100, 1500)),
    ("sparse", GameConfig::new_unchecked(500, 500, 50)),
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in TIERS {
        let mut rng = SmallRng::seed_from_u64(0);
        group.bench_function(name, |b| {
            b.iter(|| generate(config.rows, config.cols, config.mines, &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_flood(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood");
    for (name, config) in TIERS {
        let board = generate(
            config.rows,
            config.cols,
            config.mines,
            &mut SmallRng::seed_from_u64(1),
        )
        .unwrap();
        let Some(start) = board.cells().iter().position(|cell| cell.is_empty()) else {
            continue;
        };

        group.bench_function(name, |b| {
            b.iter_batched(
                || board.clone(),
                |mut board| reveal(&mut board, black_box(start)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_flood);
criterion_main!(benches);
