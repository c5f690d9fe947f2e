//! Criterion benchmarks for the two hull constructions.
//! Focus sizes: n in {8, 32, 128} for brute force (cubic), up to 16384 for
//! divide and conquer.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2d::geom2::rand::{draw_points_disk, draw_points_uniform, Bounds2, ReplayToken};
use hull2d::hull::{brute_force_hull, divide_and_conquer_hull};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull2d");
    for &n in &[8usize, 32, 128] {
        group.bench_with_input(BenchmarkId::new("brute_force", n), &n, |b, &n| {
            b.iter_batched(
                || draw_points_uniform(n, Bounds2::default(), ReplayToken::new(42, n as u64)),
                |pts| {
                    let _h = brute_force_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    for &n in &[8usize, 32, 128, 1024, 16384] {
        group.bench_with_input(BenchmarkId::new("divide_and_conquer", n), &n, |b, &n| {
            b.iter_batched(
                || draw_points_uniform(n, Bounds2::default(), ReplayToken::new(42, n as u64)),
                |pts| {
                    let _h = divide_and_conquer_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    // disk samples put more points near the boundary
    group.bench_function(BenchmarkId::new("divide_and_conquer_disk", 1024), |b| {
        b.iter_batched(
            || draw_points_disk(1024, 1.0, ReplayToken::new(7, 0)),
            |pts| {
                let _h = divide_and_conquer_hull(&pts);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
