//! Directory scan benchmarks using Criterion

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use framekit_benchmarks::{gappy_frames, render_dir};
use framekit_core::{PaddingPolicy, ScanOptions, Sequence};

fn scan_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for count in [100, 1000] {
        let frames: Vec<i64> = (1..=count).collect();
        let dir = render_dir(&frames).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("scan_{}_frames", count), |b| {
            b.iter(|| black_box(Sequence::scan(dir.path()).unwrap()))
        });
    }

    let dir = render_dir(&gappy_frames(1000, 0.1, 7)).unwrap();
    let options = ScanOptions::default().with_padding_policy(PaddingPolicy::MostCommon);
    group.bench_function("scan_most_common_padding", |b| {
        b.iter(|| black_box(Sequence::scan_with(dir.path(), &options).unwrap()))
    });

    let seq = Sequence::scan(dir.path()).unwrap();
    group.bench_function("missing_frames_1000", |b| {
        b.iter(|| black_box(seq.missing_frames_pretty()))
    });

    group.finish();
}

criterion_group!(benches, scan_benchmarks);
criterion_main!(benches);
