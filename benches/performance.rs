//! Performance benchmarks for Emopick.
//!
//! Run with: cargo bench
//!
//! Target performance:
//! - Search latency: < 1ms per keystroke over the built-in corpus

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use emopick::SearchEngine;

/// Benchmark search over the built-in corpus.
fn bench_search(c: &mut Criterion) {
    let engine = SearchEngine::default();

    let queries = [
        ("empty", ""),
        ("single_char", "f"),
        ("common_word", "face"),
        ("rare_word", "penguin"),
        ("no_match", "zzzzzz"),
    ];

    let mut group = c.benchmark_group("search");

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |b, query| {
            b.iter(|| black_box(engine.search(black_box(query), 20)))
        });
    }

    group.finish();
}

/// Benchmark the worst case: every record matched, large limit.
fn bench_search_unbounded(c: &mut Criterion) {
    let engine = SearchEngine::default();

    c.bench_function("search_all_records", |b| {
        b.iter(|| black_box(engine.search(black_box(""), usize::MAX)))
    });
}

criterion_group!(benches, bench_search, bench_search_unbounded);
criterion_main!(benches);
