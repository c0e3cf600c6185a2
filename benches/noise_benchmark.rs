//! Benchmarks for noise sampling and volume classification.
//!
//! Run with: cargo bench --bench noise_benchmark

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use geonoise::noise::{fbm, Perlin};
use geonoise::{noise1, noise2, noise3, BoundingBox, BoundingSphere, Classify, Vec3};
use std::hint::black_box;

fn benchmark_single_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_sample");
    group.bench_function("noise1", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise1(black_box(x)))
        });
    });
    group.bench_function("noise2", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise2(black_box(x), black_box(x * 0.7)))
        });
    });
    group.bench_function("noise3", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise3(black_box(x), black_box(x * 0.7), black_box(x * 0.3)))
        });
    });
    group.finish();
}

fn benchmark_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    group.throughput(Throughput::Elements(256 * 256));
    group.sample_size(20);

    group.bench_function("noise2_256x256", |b| {
        b.iter(|| {
            for i in 0..256 * 256 {
                let x = (i % 256) as f64 * 0.05;
                let y = (i / 256) as f64 * 0.05;
                black_box(noise2(x, y));
            }
        });
    });
    group.bench_function("fbm3_6_octaves_256x256", |b| {
        b.iter(|| {
            for i in 0..256 * 256 {
                let x = (i % 256) as f64 * 0.05;
                let y = (i / 256) as f64 * 0.05;
                black_box(fbm(&Perlin, [x, y, 0.5], 6));
            }
        });
    });
    group.finish();
}

fn benchmark_classify(c: &mut Criterion) {
    let bx = BoundingBox::new(Vec3::ZERO, Vec3::splat(10.0));
    let inside = BoundingSphere::new(Vec3::splat(5.0), 1.0);
    let edge = BoundingSphere::new(Vec3::new(11.0, 5.0, 5.0), 2.0);

    c.bench_function("box_vs_sphere_fast_path", |b| {
        b.iter(|| black_box(black_box(&bx).classify(black_box(&inside))));
    });
    c.bench_function("sphere_vs_box_fallback", |b| {
        b.iter(|| black_box(black_box(&edge).classify(black_box(&bx))));
    });
}

criterion_group!(
    benches,
    benchmark_single_samples,
    benchmark_grid,
    benchmark_classify
);
criterion_main!(benches);
