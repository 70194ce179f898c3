use criterion::{criterion_group, criterion_main, Criterion};
use glam::DVec2;
use polymorph_core::{Predator, PredatorConfig, PreyRecord, Rgb, SectorGrid, SimRng};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::hint::black_box;

fn population(size: usize, rng: &mut Xoshiro256StarStar) -> Vec<PreyRecord> {
    (0..size)
        .map(|_| {
            let pos = DVec2::new(rng.next_unit() * 2.0 - 1.0, rng.next_unit() * 2.0 - 1.0);
            PreyRecord::new(pos, Rgb::random(rng), 100)
        })
        .collect()
}

fn bench_prey_search(c: &mut Criterion) {
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);
    let prey = population(5_000, &mut rng);
    let config = PredatorConfig {
        visual_search_range: 0.15,
        ..PredatorConfig::default()
    };
    let predator = Predator::new(DVec2::new(0.1, -0.2), 0.0, 100, Rgb::random(&mut rng), &config);
    let grid = SectorGrid::build(&prey, 0.1, 20).expect("grid build failed");

    let mut group = c.benchmark_group("prey_search");
    group.bench_function("exhaustive_5000", |b| {
        b.iter(|| black_box(predator.prey_search(black_box(&prey), 0.5)))
    });
    group.bench_function("indexed_5000", |b| {
        b.iter(|| black_box(predator.prey_search_indexed(&grid, black_box(&prey), 0.5)))
    });
    group.finish();
}

criterion_group!(benches, bench_prey_search);
criterion_main!(benches);
