use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sweeper_core::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, height, width, mines) in [
        ("beginner", 9, 9, 10),
        ("expert", 16, 30, 99),
        ("dense", 30, 30, 800),
    ] {
        let config = GameConfig::new(height, width, mines).unwrap();
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(RandomBoardGenerator::new(seed).generate(config))
            })
        });
    }
    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    // a single mine in the corner leaves almost the whole board as one zero region
    let grid = Grid::from_mine_coords((200, 200), &[(0, 0)]).unwrap();
    c.bench_function("flood_fill_200x200", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut grid| black_box(reveal(&mut grid, (199, 199)).unwrap()),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_flood_fill);
criterion_main!(benches);
