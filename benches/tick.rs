use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fly_controls::core::WinitInput;
use fly_controls::math::small_angle_delta;
use fly_controls::{FlyControls, LogicalAction, Object3D};
use glam::DVec3;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Benchmark: Idle tick (no held actions)
fn bench_tick_idle(c: &mut Criterion) {
    let mut controls = FlyControls::new(Object3D::new());
    let held: HashSet<LogicalAction> = HashSet::new();

    c.bench_function("tick_idle", |b| {
        b.iter(|| controls.tick(black_box(1.0 / 60.0), black_box(&held)))
    });
}

/// Benchmark: Tick with every action held, through different input sources
fn bench_tick_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_all_held");

    let set: HashSet<LogicalAction> = LogicalAction::ALL.into_iter().collect();
    group.bench_with_input(BenchmarkId::new("source", "hash_set"), &set, |b, input| {
        let mut controls = FlyControls::new(Object3D::new());
        b.iter(|| controls.tick(black_box(1.0 / 60.0), input))
    });

    let array = LogicalAction::ALL;
    group.bench_with_input(BenchmarkId::new("source", "array"), &array, |b, input| {
        let mut controls = FlyControls::new(Object3D::new());
        b.iter(|| controls.tick(black_box(1.0 / 60.0), input))
    });

    let mut winit_input = WinitInput::default();
    for key in [
        KeyCode::KeyW,
        KeyCode::KeyA,
        KeyCode::KeyR,
        KeyCode::ArrowUp,
        KeyCode::ArrowLeft,
        KeyCode::KeyQ,
    ] {
        winit_input.press(key);
    }
    group.bench_with_input(BenchmarkId::new("source", "winit"), &winit_input, |b, input| {
        let mut controls = FlyControls::new(Object3D::new());
        b.iter(|| controls.tick(black_box(1.0 / 60.0), input))
    });

    group.finish();
}

/// Benchmark: Delta quaternion construction alone
fn bench_small_angle_delta(c: &mut Criterion) {
    let v = DVec3::new(0.01, -0.02, 0.005);
    c.bench_function("small_angle_delta", |b| {
        b.iter(|| black_box(small_angle_delta(black_box(v))))
    });
}

criterion_group!(benches, bench_tick_idle, bench_tick_inputs, bench_small_angle_delta);

criterion_main!(benches);
