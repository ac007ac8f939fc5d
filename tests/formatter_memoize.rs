//! Integration tests for record formatters and memoization.

mod common;

use common::sample;
use serde_json::json;
use shelfcat::format::{format_availability, make_formatter, FormatFn, RecordFormatter};
use shelfcat::memoize::memoize;
use shelfcat::query::summarize;
use shelfcat::{CatalogError, CatalogRecord};
use std::cell::Cell;
use std::convert::Infallible;

#[test]
fn test_default_formatter_over_sample() {
    let lines = make_formatter(None).format_all(&sample());
    assert_eq!(lines[0], "The Clean Coder by Robert C. Martin (Programming)");
    assert_eq!(lines[2], "Design Patterns by Gang of Four (Software Engineering)");
}

#[test]
fn test_custom_formatter_with_partial_output() {
    let custom: Box<FormatFn> = Box::new(|record: &CatalogRecord| {
        if record.is_available() {
            format!("[on shelf] {}", record.title().unwrap_or_default())
        } else {
            String::new()
        }
    });
    let lines = make_formatter(Some(custom)).format_all(&sample());
    assert_eq!(
        lines,
        vec![
            "[on shelf] The Clean Coder",
            "You Don't Know JS by Kyle Simpson",
            "Design Patterns by Gang of Four",
            "[on shelf] Clean Architecture",
        ]
    );
}

#[test]
fn test_formatter_rejects_non_sequence() {
    let formatter = RecordFormatter::default();
    for value in [json!(null), json!(3), json!({"title": "Solo"})] {
        match formatter.format_value(&value) {
            Err(CatalogError::InvalidArgument(message)) => {
                assert!(message.contains("array"));
            },
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }
    assert_eq!(formatter.format_value(&json!([])).unwrap(), Vec::<String>::new());
}

#[test]
fn test_memoized_summary_is_computed_once() {
    let calls = Cell::new(0);
    let memo = memoize("summarize", |record: &CatalogRecord| {
        calls.set(calls.get() + 1);
        Ok::<_, Infallible>(summarize(record))
    });

    let records = sample();
    let first = memo.call(&records[0]).unwrap();
    let second = memo.call(&records[0]).unwrap();
    assert_eq!(first, second);
    assert_eq!(calls.get(), 1);

    memo.call(&records[1]).unwrap();
    assert_eq!(calls.get(), 2);
    assert_eq!(memo.len(), 2);
}

#[test]
fn test_memoize_propagates_errors_without_caching() {
    let calls = Cell::new(0);
    let strict = memoize("strict_title", |record: &CatalogRecord| {
        calls.set(calls.get() + 1);
        record
            .title()
            .map(str::to_string)
            .ok_or_else(|| CatalogError::InvalidRecord("record has no title".to_string()))
    });

    let untitled = CatalogRecord::default();
    assert!(strict.call(&untitled).is_err());
    assert!(strict.call(&untitled).is_err());
    assert_eq!(calls.get(), 2);
    assert!(strict.is_empty());
}

#[test]
fn test_format_availability_labels() {
    let records = sample();
    let labels: Vec<String> = records
        .iter()
        .map(|r| format_availability(r.availability.as_ref()))
        .collect();
    assert_eq!(
        labels,
        vec![
            "Available — Shelf: A1-23",
            "Checked Out — Due: 2024-12-01",
            "Availability Unknown",
            "Available — Shelf: A2-15",
        ]
    );
}
