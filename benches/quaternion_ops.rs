//! Quaternion operation benchmarks
//!
//! Measures the per-call cost of the Hamilton product, checked division,
//! inversion, norm and the text round-trip for `f32` and `f64`.
//!
//! ## Usage
//!
//! ```bash
//! cargo bench --bench quaternion_ops
//! ```

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quaternion_algebra::{Quaternion, Quaternion32, Quaternion64, init_logger};
use std::hint::black_box;
use tracing::info;

fn hamilton_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamilton_product");

    let a64 = Quaternion64::new(1.0, 2.0, 3.0, 4.0);
    let b64 = Quaternion64::new(-0.5, 0.25, 2.0, -1.0);
    group.bench_function(BenchmarkId::new("mul", "f64"), |bench| {
        bench.iter(|| black_box(a64) * black_box(b64))
    });

    let a32 = Quaternion32::new(1.0, 2.0, 3.0, 4.0);
    let b32 = Quaternion32::new(-0.5, 0.25, 2.0, -1.0);
    group.bench_function(BenchmarkId::new("mul", "f32"), |bench| {
        bench.iter(|| black_box(a32) * black_box(b32))
    });

    group.bench_function(BenchmarkId::new("mul_assign_chain", "f64"), |bench| {
        bench.iter(|| {
            let mut acc = Quaternion64::identity();
            for _ in 0..64 {
                acc *= black_box(b64);
            }
            acc
        })
    });

    group.finish();
}

fn division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");

    let a = Quaternion64::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion64::new(-0.5, 0.25, 2.0, -1.0);

    group.bench_function("closed_form", |bench| {
        bench.iter(|| black_box(a).try_div(&black_box(b)))
    });
    group.bench_function("via_inverse", |bench| {
        bench.iter(|| black_box(b).inverse().map(|inv| black_box(a) * inv))
    });
    group.bench_function("scalar", |bench| {
        bench.iter(|| black_box(a).try_div_scalar(black_box(3.0)))
    });
    group.bench_function("rejected", |bench| {
        bench.iter(|| black_box(a).try_div(&black_box(Quaternion::null())))
    });

    group.finish();
}

fn norm_and_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("norm_and_text");

    let q = Quaternion64::new(0.1, -2.5, 1e-7, 12345.678);
    let rendered = q.to_string();

    group.bench_function("norm", |bench| bench.iter(|| black_box(q).norm()));
    group.bench_function("display", |bench| bench.iter(|| black_box(q).to_string()));
    group.bench_function("parse", |bench| {
        bench.iter(|| black_box(rendered.as_str()).parse::<Quaternion64>())
    });

    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    init_logger();
    info!("Benchmarking quaternion operations");

    hamilton_product(c);
    division(c);
    norm_and_text(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
