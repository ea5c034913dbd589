//! Full CPU frame: escape-time evaluation, palette lookup and optional strip overlay.
//!
//! Run with: cargo bench --bench render_pipeline

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use fractal_viewer::core::actions::cancellation::NeverCancel;
use fractal_viewer::{CompositorConfig, FrameCompositor, PALETTE_STRIP_ROWS, Viewport, render_frame};

const SIZES: [(u32, u32); 3] = [(320, 180), (800, 450), (1366, 768)];

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pipeline/home_view");
    group.sample_size(20);

    for (width, height) in SIZES {
        let Ok(viewport) = Viewport::new(width, height) else {
            continue;
        };
        let Ok(mut compositor) = FrameCompositor::new(CompositorConfig {
            viewport,
            ..CompositorConfig::default()
        }) else {
            continue;
        };
        let Ok(frame) = compositor.snapshot() else {
            continue;
        };

        group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &frame,
            |b, frame| b.iter(|| black_box(render_frame(frame, 0, &NeverCancel))),
        );
    }

    group.finish();
}

fn bench_seeds(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pipeline/seeds_800x450");
    group.sample_size(20);

    let Ok(viewport) = Viewport::new(800, 450) else {
        return;
    };
    let Ok(mut compositor) = FrameCompositor::new(CompositorConfig {
        viewport,
        ..CompositorConfig::default()
    }) else {
        return;
    };

    for index in 0..compositor.seeds().len() {
        if compositor.select_seed(index).is_err() {
            continue;
        }
        let Ok(frame) = compositor.snapshot() else {
            continue;
        };

        group.bench_with_input(BenchmarkId::from_parameter(index), &frame, |b, frame| {
            b.iter(|| black_box(render_frame(frame, PALETTE_STRIP_ROWS, &NeverCancel)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_frame, bench_seeds);
criterion_main!(benches);
