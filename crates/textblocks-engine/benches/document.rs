use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use textblocks_engine::Document;
mod common;

fn bench_document_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_creation");
    group.sample_size(20);

    let content = common::generate_outline_text(500);
    group.bench_function("process_original_text", |b| {
        b.iter(|| {
            let mut doc = Document::new();
            doc.process_original_text(black_box(&content));
            black_box(doc);
        });
    });

    group.finish();
}

fn bench_document_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_operations");
    group.sample_size(20);

    let mut doc = Document::new();
    doc.process_original_text(&common::generate_outline_text(500));
    let middle = doc.blocks()[doc.len() / 2].id();

    group.bench_function("add_and_delete_paragraph", |b| {
        b.iter(|| {
            let id = doc.add_empty_paragraph(Some(black_box(10)));
            doc.delete_block(id);
        });
    });

    group.bench_function("toggle_title_status", |b| {
        b.iter(|| {
            doc.toggle_title_status(middle, true);
            doc.toggle_title_status(middle, false);
        });
    });

    group.bench_function("collapse_and_expand_all", |b| {
        b.iter(|| {
            doc.collapse_all();
            doc.expand_all();
        });
    });

    group.bench_function("text_for_saving", |b| {
        b.iter(|| black_box(doc.text_for_saving()));
    });

    group.bench_function("stats", |b| {
        b.iter(|| black_box(doc.stats()));
    });

    group.finish();
}

criterion_group!(benches, bench_document_creation, bench_document_operations);
criterion_main!(benches);
