//! Tick-loop benchmarks for the orbit camera.

// criterion's macros generate undocumented public items
#![allow(missing_docs, unused_results)]

use criterion::{criterion_group, criterion_main, Criterion, black_box};
use glam::Vec3;
use orbicam::camera::core::range_value;
use orbicam::camera::frustum::Aabb;
use orbicam::input::{InputEvent, TouchPhase, TouchPoint};
use orbicam::options::{CameraOptions, DisplayOptions, KeybindingOptions};
use orbicam::{CameraController, ScreenInfo};

fn screen() -> ScreenInfo {
    ScreenInfo::new(1920, 1080, 1.0, &DisplayOptions::default())
}

fn range_value_benchmark(c: &mut Criterion) {
    c.bench_function("range_value_wrap", |b| {
        b.iter(|| black_box(range_value(black_box(-1234.5))))
    });
}

fn held_key_tick_benchmark(c: &mut Criterion) {
    let mut camera = CameraController::desktop(
        CameraOptions::default(),
        &screen(),
        KeybindingOptions::default(),
    );
    let _ = camera.handle_event(&InputEvent::Key {
        code: "ArrowLeft".into(),
        pressed: true,
    });

    c.bench_function("desktop_held_key_tick", |b| {
        b.iter(|| black_box(camera.do_move()))
    });
}

fn glide_benchmark(c: &mut Criterion) {
    c.bench_function("glide_to_target_30_steps", |b| {
        let mut camera = CameraController::desktop(
            CameraOptions::default(),
            &screen(),
            KeybindingOptions::default(),
        );
        b.iter(|| {
            camera.set_target_in_steps(Vec3::new(5.0, 0.0, -3.0), 120.0, 40.0, 10.0, 30);
            while camera.do_move() {}
            camera.set(Vec3::ZERO, 0.0, 55.0, 13.0);
        })
    });
}

fn touch_pan_benchmark(c: &mut Criterion) {
    let mut camera = CameraController::touch(CameraOptions::default(), &screen());
    let mut y = 0.0_f32;

    c.bench_function("touch_two_finger_pan_tick", |b| {
        b.iter(|| {
            let frame = (0..2)
                .map(|id| TouchPoint {
                    id,
                    x: 100.0 * id as f32,
                    y: y + 1.0,
                    prev_x: 100.0 * id as f32,
                    prev_y: y,
                    phase: TouchPhase::Moved,
                })
                .collect();
            y += 1.0;
            let _ = camera.handle_event(&InputEvent::Touches(frame));
            black_box(camera.do_move())
        })
    });
}

fn visibility_benchmark(c: &mut Criterion) {
    let camera = CameraController::desktop(
        CameraOptions::default(),
        &screen(),
        KeybindingOptions::default(),
    );
    let boxes: Vec<Aabb> = (0..100)
        .map(|i| {
            let offset = Vec3::new(i as f32 - 50.0, 0.0, (i % 10) as f32 * -5.0);
            Aabb::new(offset, offset + Vec3::ONE)
        })
        .collect();

    c.bench_function("is_visible_100_boxes", |b| {
        b.iter(|| boxes.iter().filter(|bbox| camera.is_visible(bbox)).count())
    });
}

criterion_group!(
    benches,
    range_value_benchmark,
    held_key_tick_benchmark,
    glide_benchmark,
    touch_pan_benchmark,
    visibility_benchmark
);
criterion_main!(benches);
