#![allow(missing_docs)]
//! Benchmarks for the shelfcat catalog.
//!
//! Compares cached and uncached search, and measures statistics and
//! summary generation over a generated collection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shelfcat::query::{group_by_category, summarize};
use shelfcat::{Availability, CatalogConfig, CatalogManager, CatalogRecord, SearchQuery};

/// Build a collection of `n` records spread over a few categories.
fn generate_records(n: u64) -> Vec<CatalogRecord> {
    const CATEGORIES: [&str; 4] = ["Programming", "Software Engineering", "Databases", "Networks"];
    (0..n)
        .map(|i| {
            let availability = match i % 3 {
                0 => Some(Availability::available_at(format!("A{}-{:02}", i % 9, i % 50))),
                1 => Some(Availability::checked_out_until("2025-03-01")),
                _ => None,
            };
            CatalogRecord {
                id: Some(i),
                title: Some(format!("Volume {i}")),
                author: Some(format!("Author {}", i % 97)),
                publication_year: Some(1950 + i32::try_from(i % 75).unwrap_or(0)),
                category: Some(CATEGORIES[(i % 4) as usize].to_string()),
                availability,
            }
        })
        .collect()
}

/// Benchmark repeated search with the result cache on.
fn benchmark_search_cached(c: &mut Criterion) {
    let mut catalog = CatalogManager::new(generate_records(10_000));
    let query = SearchQuery::new().author("author 4").category("data");

    c.bench_function("search_10k_cached", |b| {
        b.iter(|| catalog.search(black_box(&query)).len());
    });
}

/// Benchmark repeated search with the result cache off.
fn benchmark_search_uncached(c: &mut Criterion) {
    let config = CatalogConfig {
        cache_searches: false,
        ..CatalogConfig::default()
    };
    let mut catalog = CatalogManager::with_config(generate_records(10_000), config);
    let query = SearchQuery::new().author("author 4").category("data");

    c.bench_function("search_10k_uncached", |b| {
        b.iter(|| catalog.search(black_box(&query)).len());
    });
}

/// Benchmark the full statistics report.
fn benchmark_statistics(c: &mut Criterion) {
    let catalog = CatalogManager::new(generate_records(10_000));

    c.bench_function("statistics_10k", |b| {
        b.iter(|| black_box(catalog.statistics()));
    });
}

/// Benchmark grouping and summarizing.
fn benchmark_group_and_summarize(c: &mut Criterion) {
    let records = generate_records(10_000);

    c.bench_function("group_by_category_10k", |b| {
        b.iter(|| group_by_category(black_box(&records)).len());
    });

    c.bench_function("summarize_10k", |b| {
        b.iter(|| records.iter().map(summarize).map(|s| s.len()).sum::<usize>());
    });
}

criterion_group!(
    benches,
    benchmark_search_cached,
    benchmark_search_uncached,
    benchmark_statistics,
    benchmark_group_and_summarize
);
criterion_main!(benches);
