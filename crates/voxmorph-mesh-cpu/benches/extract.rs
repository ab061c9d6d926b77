use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use voxmorph_grid::VoxelGrid;
use voxmorph_mesh_cpu::{ParallelOptions, extract_mesh, extract_mesh_par, extract_sequence_par};

fn ball(n: usize) -> VoxelGrid {
    let c = (n as f32 - 1.0) * 0.5;
    let r2 = (c * 0.8) * (c * 0.8);
    VoxelGrid::from_fn(n, n, n, |i, j, k| {
        let (x, y, z) = (i as f32 - c, j as f32 - c, k as f32 - c);
        x * x + y * y + z * z <= r2
    })
    .unwrap()
}

// Alternating solid cells expose every face: worst case for emission.
fn checker(n: usize) -> VoxelGrid {
    VoxelGrid::from_fn(n, n, n, |i, j, k| (i + j + k) % 2 == 0).unwrap()
}

fn bench_extract_serial(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_serial");
    for n in [32usize, 64] {
        let ball = ball(n);
        group.bench_function(format!("ball_{n}"), |b| {
            b.iter(|| {
                let mut g = ball.clone();
                black_box(extract_mesh(&mut g));
            })
        });
    }
    let chk = checker(32);
    group.bench_function("checker_32", |b| {
        b.iter(|| {
            let mut g = chk.clone();
            black_box(extract_mesh(&mut g));
        })
    });
    group.finish();
}

fn bench_extract_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_parallel");
    let ball = ball(64);
    let opts = ParallelOptions::default();
    group.bench_function("ball_64", |b| {
        b.iter(|| {
            let mut g = ball.clone();
            black_box(extract_mesh_par(&mut g, &opts).unwrap());
        })
    });
    let frames: Vec<VoxelGrid> = (0..16).map(|_| ball.clone()).collect();
    group.bench_function("sequence_16x64", |b| {
        b.iter(|| {
            let mut fs = frames.clone();
            black_box(extract_sequence_par(&mut fs, &opts).unwrap());
        })
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5));
    targets = bench_extract_serial, bench_extract_parallel
}
criterion_main!(benches);
