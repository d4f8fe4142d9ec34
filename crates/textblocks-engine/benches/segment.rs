use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use textblocks_engine::parsing::{segment, split_lines};
mod common;

fn bench_split_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_lines");
    group.sample_size(20);

    let unix = common::generate_outline_text(1000);
    let windows = common::generate_windows_outline_text(1000);

    group.bench_function("lf", |b| {
        b.iter(|| black_box(split_lines(black_box(&unix))));
    });
    group.bench_function("crlf", |b| {
        b.iter(|| black_box(split_lines(black_box(&windows))));
    });

    group.finish();
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");
    group.sample_size(20);

    for sections in [10, 100, 1000] {
        let content = common::generate_outline_text(sections);
        group.bench_function(format!("sections_{sections}"), |b| {
            b.iter(|| black_box(segment(black_box(&content))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_split_lines, bench_segment);
criterion_main!(benches);
