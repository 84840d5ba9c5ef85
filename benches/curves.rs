//! Benchmarks for Catmull-Rom curve sampling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use catrom::curves::{catmull_rom_curve, catmull_rom_curve_flat, points_to_flat};
use catrom::Point2;

/// Generate an unevenly spaced wavy polyline.
fn generate_polyline(num_points: usize) -> Vec<Point2<f64>> {
    (0..num_points)
        .map(|i| {
            let x = i as f64 + ((i * 17) % 10) as f64 / 20.0;
            let y = (x * 0.7).sin() * 3.0;
            Point2::new(x, y)
        })
        .collect()
}

fn bench_catmull_rom_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("catmull_rom_points");

    for count in [4, 64, 1024] {
        let points = generate_polyline(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("centripetal", count), &points, |b, points| {
            b.iter(|| catmull_rom_curve(black_box(points), 10, 0.5))
        });
    }

    group.finish();
}

fn bench_catmull_rom_subdivisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("catmull_rom_subdivisions");
    let points = generate_polyline(64);

    for subdivisions in [4, 16, 128] {
        group.throughput(Throughput::Elements(((points.len() - 1) * (subdivisions + 1)) as u64));

        group.bench_with_input(
            BenchmarkId::new("centripetal", subdivisions),
            &subdivisions,
            |b, &subdivisions| b.iter(|| catmull_rom_curve(black_box(&points), subdivisions, 0.5)),
        );
    }

    group.finish();
}

fn bench_comparison_alpha(c: &mut Criterion) {
    let mut group = c.benchmark_group("catmull_rom_alpha");
    let points = generate_polyline(256);

    group.bench_function("uniform", |b| {
        b.iter(|| catmull_rom_curve(black_box(&points), 10, 0.0))
    });
    group.bench_function("centripetal", |b| {
        b.iter(|| catmull_rom_curve(black_box(&points), 10, 0.5))
    });
    group.bench_function("chordal", |b| {
        b.iter(|| catmull_rom_curve(black_box(&points), 10, 1.0))
    });

    group.finish();
}

fn bench_catmull_rom_flat(c: &mut Criterion) {
    let coords = points_to_flat(&generate_polyline(256));

    c.bench_function("catmull_rom_flat", |b| {
        b.iter(|| catmull_rom_curve_flat(black_box(&coords), 10, 0.5))
    });
}

criterion_group!(
    benches,
    bench_catmull_rom_points,
    bench_catmull_rom_subdivisions,
    bench_comparison_alpha,
    bench_catmull_rom_flat
);
criterion_main!(benches);
