use criterion::{Criterion, criterion_group, criterion_main};
use mention_markup_engine::{extract_hashtags, has_markup, parse_segments};
mod common;

fn bench_parse_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let post = common::generate_post(50);
    group.bench_function("parse_segments_markup", |b| {
        b.iter(|| {
            let segments = parse_segments(std::hint::black_box(&post));
            std::hint::black_box(segments);
        });
    });

    let plain = common::generate_plain_text(100);
    group.bench_function("parse_segments_plain", |b| {
        b.iter(|| {
            let segments = parse_segments(std::hint::black_box(&plain));
            std::hint::black_box(segments);
        });
    });

    group.finish();
}

fn bench_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("helpers");
    group.sample_size(10);

    let post = common::generate_post(50);
    group.bench_function("extract_hashtags", |b| {
        b.iter(|| std::hint::black_box(extract_hashtags(std::hint::black_box(&post))));
    });
    group.bench_function("has_markup", |b| {
        b.iter(|| std::hint::black_box(has_markup(std::hint::black_box(&post))));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_segments, bench_helpers);
criterion_main!(benches);
