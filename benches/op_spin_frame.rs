//! Criterion benchmarks for `OpSpinFrame`.
//!
//! Focuses on resampling kernel cost by reusing preallocated destination
//! buffers. Covers size scaling, the angle sweep of an animation loop, and
//! the overhead of allocating a fresh destination per frame. For detailed
//! statistics, use `cargo run --bin benchmark_op_spin_frame`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rotoframe::{bench_utils, Frame, OpSpinFrame};

fn make_fixture(size: u32, angle: f64) -> (OpSpinFrame, Frame, Frame) {
    let input = bench_utils::create_test_frame(size, size);
    let mut spin = OpSpinFrame::new(size, size).expect("nonzero bench size");
    spin.set_angle(angle);
    let output = Frame::new(size, size).expect("nonzero bench size");
    (spin, input, output)
}

fn bench_size_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("size_scaling_0p2rad");
    for size in bench_utils::BENCH_SIZES {
        let (spin, input, mut output) = make_fixture(size, 0.2);
        group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                spin.apply_to_preallocated(black_box(&input), black_box(&mut output))
                    .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_angle_sweep_512(c: &mut Criterion) {
    let mut group = c.benchmark_group("angle_sweep_512");
    let size = 512_u32;
    for angle in bench_utils::BENCH_ANGLES {
        let (spin, input, mut output) = make_fixture(size, angle);
        group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));
        group.bench_function(BenchmarkId::new("angle", format!("{angle:.3}")), |b| {
            b.iter(|| {
                spin.apply_to_preallocated(black_box(&input), black_box(&mut output))
                    .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_alloc_vs_preallocated(c: &mut Criterion) {
    let mut group = c.benchmark_group("alloc_vs_preallocated_512");
    let size = 512_u32;
    let (spin, input, mut output) = make_fixture(size, 0.2);
    group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));

    group.bench_function("apply", |b| {
        b.iter(|| {
            let frame = spin.apply(black_box(&input)).unwrap();
            black_box(frame);
        });
    });

    group.bench_function("apply_to_preallocated", |b| {
        b.iter(|| {
            spin.apply_to_preallocated(black_box(&input), black_box(&mut output))
                .unwrap();
        });
    });
    group.finish();
}

fn bench_animation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation_step_512");
    let size = 512_u32;
    let (mut spin, input, mut output) = make_fixture(size, 0.0);
    group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));
    group.bench_function("advance_and_render", |b| {
        b.iter(|| {
            spin.advance(OpSpinFrame::DEFAULT_ANGLE_STEP);
            spin.apply_to_preallocated(black_box(&input), black_box(&mut output))
                .unwrap();
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_size_scaling,
    bench_angle_sweep_512,
    bench_alloc_vs_preallocated,
    bench_animation_step
);
criterion_main!(benches);
