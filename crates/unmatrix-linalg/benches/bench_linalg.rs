use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use unmatrix_linalg::{matrix, vector};

fn bench_matrix4(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix4");
    let m = [
        [2.0, 1.0, 0.0, 0.0],
        [0.5, 3.0, 1.0, 0.0],
        [0.0, 1.0, 4.0, 0.0],
        [5.0, -3.0, 2.0, 1.0],
    ];

    group.bench_function(BenchmarkId::new("determinant", ""), |b| {
        b.iter(|| black_box(matrix::determinant(black_box(&m))))
    });

    group.bench_function(BenchmarkId::new("inverse", ""), |b| {
        b.iter(|| black_box(matrix::inverse(black_box(&m))))
    });

    group.bench_function(BenchmarkId::new("inverse_transpose_multiply", ""), |b| {
        b.iter(|| {
            let inv = matrix::inverse(black_box(&m)).map(|inv| matrix::transpose(&inv));
            black_box(inv.and_then(|t| matrix::multiply(&t, &[0.0, 0.0, -0.01, 1.0])))
        })
    });

    group.finish();
}

fn bench_vector3(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector3");
    let a = [1.0, 2.0, 3.0];
    let b = [-4.0, 0.5, 2.0];

    group.bench_function(BenchmarkId::new("normalize", ""), |bench| {
        bench.iter(|| black_box(vector::normalize(black_box(&a))))
    });

    group.bench_function(BenchmarkId::new("cross", ""), |bench| {
        bench.iter(|| black_box(vector::cross(black_box(&a), black_box(&b))))
    });

    group.finish();
}

criterion_group!(benches, bench_matrix4, bench_vector3);
criterion_main!(benches);
