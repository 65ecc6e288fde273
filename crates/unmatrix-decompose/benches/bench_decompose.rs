use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use unmatrix_decompose::{decompose, matrix_from_2d, recompose, TransformResult};

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");

    let affine_2d = matrix_from_2d(&[0.866, 0.5, -0.5, 0.866, 10.0, 20.0]);

    let transform = TransformResult {
        translate_x: 10.0,
        translate_z: -4.0,
        scale_x: 2.0,
        skew: 15.0,
        rotate_x: 30.0,
        rotate_y: 20.0,
        rotate_z: 60.0,
        perspective: Some([0.0, 0.0, -0.002, 1.0]),
        ..Default::default()
    };
    let Ok(perspective_3d) = recompose(&transform) else {
        return;
    };

    group.bench_function(BenchmarkId::new("affine_2d", ""), |b| {
        b.iter(|| black_box(decompose(black_box(&affine_2d))))
    });

    group.bench_function(BenchmarkId::new("perspective_3d", ""), |b| {
        b.iter(|| black_box(decompose(black_box(&perspective_3d))))
    });

    group.bench_function(BenchmarkId::new("recompose", ""), |b| {
        b.iter(|| black_box(recompose(black_box(&transform))))
    });

    group.finish();
}

criterion_group!(benches, bench_decompose);
criterion_main!(benches);
