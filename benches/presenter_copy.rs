//! RGB to RGBA framebuffer copy, serial below the parallel threshold and rayon above.
//!
//! Run with: cargo bench --bench presenter_copy

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use fractal_viewer::adapters::pixel_format::copy_rgb_to_rgba;

const SIZES: [(usize, usize); 4] = [(128, 128), (320, 180), (1366, 768), (1920, 1080)];

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("presenter_copy/rgb_to_rgba");

    for (width, height) in SIZES {
        let pixels = width * height;
        let src: Vec<u8> = (0..pixels * 3).map(|i| (i % 251) as u8).collect();
        let mut dst = vec![0u8; pixels * 4];

        group.throughput(Throughput::Bytes((pixels * 4) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &src,
            |b, src| b.iter(|| black_box(copy_rgb_to_rgba(black_box(src), &mut dst))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_copy);
criterion_main!(benches);
