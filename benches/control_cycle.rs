use camera_rig::camera::{Camera, Viewport};
use camera_rig::core::{CameraEvent, MatrixSlot, PointerButton};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

struct NullSlot;

impl MatrixSlot for NullSlot {
    fn set(&mut self, _matrix: [[f32; 4]; 4]) {}
}

fn activated_camera() -> Camera {
    let mut camera = Camera::new(
        Box::new(NullSlot),
        Box::new(NullSlot),
        Viewport::new(800.0, 600.0),
    );
    camera.reset();
    camera.init_controls(Vec::new()).unwrap();
    camera
}

/// Benchmark: control cycle with no pending input
fn bench_idle_cycle(c: &mut Criterion) {
    let mut camera = activated_camera();

    c.bench_function("control_idle", |b| {
        b.iter(|| {
            let _ = black_box(camera.control());
        })
    });
}

/// Benchmark: control cycle resolving a wheel dolly
fn bench_wheel_cycle(c: &mut Criterion) {
    let mut camera = activated_camera();

    c.bench_function("control_wheel", |b| {
        b.iter(|| {
            camera.handle_event(CameraEvent::Wheel { delta: 1.0 });
            let _ = black_box(camera.control());
        })
    });
}

/// Benchmark: control cycle resolving an orbit drag
fn bench_orbit_cycle(c: &mut Criterion) {
    let mut camera = activated_camera();
    camera.handle_event(CameraEvent::ButtonPressed(PointerButton::Right));
    let mut flip = false;

    c.bench_function("control_orbit", |b| {
        b.iter(|| {
            // Alternate positions so every cycle sees nonzero movement.
            flip = !flip;
            let x = if flip { 0.25 } else { -0.25 };
            camera.handle_event(CameraEvent::PointerMoved { x, y: -x });
            let _ = black_box(camera.control());
        })
    });
}

/// Benchmark: raw event application throughput (coalescing path)
fn bench_event_application(c: &mut Criterion) {
    let mut camera = activated_camera();

    c.bench_function("apply_100_events", |b| {
        b.iter(|| {
            for i in 0..100 {
                let t = i as f32 / 100.0;
                camera.handle_event(CameraEvent::PointerMoved { x: t, y: -t });
                camera.handle_event(CameraEvent::Wheel { delta: t });
            }
            let _ = black_box(camera.control());
        })
    });
}

criterion_group!(
    benches,
    bench_idle_cycle,
    bench_wheel_cycle,
    bench_orbit_cycle,
    bench_event_application
);
criterion_main!(benches);
