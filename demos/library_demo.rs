//! Walkthrough of the catalog: statistics, filtering, grouping, search,
//! formatting, memoization and the title sequence.
//!
//! Run with `cargo run --example library_demo`. Set `RUST_LOG=shelfcat=debug`
//! to watch the search cache and statistics refresh.

use anyhow::Result;
use shelfcat::format::{format_availability, make_formatter};
use shelfcat::query::{filter_by_status, group_by_category, summarize, titles};
use shelfcat::store::{category_description, sample_records};
use shelfcat::{
    analysis, memoize, Availability, AvailabilityStatus, CatalogManager, CatalogRecord,
    RecordKey, SearchQuery,
};
use std::convert::Infallible;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let records = sample_records();
    let mut catalog = CatalogManager::new(records.clone());

    println!("\n=== Statistics ===\n");
    println!("{}", serde_json::to_string_pretty(&catalog.statistics())?);

    println!("\n=== All Records ===\n");
    for (i, record) in records.iter().enumerate() {
        println!("{}. {}", i + 1, summarize(record));
    }

    println!("\n=== Available ===\n");
    for record in filter_by_status(&records, &AvailabilityStatus::Available) {
        println!(
            "- {} ({})",
            record.title().unwrap_or("?"),
            format_availability(record.availability.as_ref())
        );
    }

    println!("\n=== By Category ===\n");
    for (category, members) in group_by_category(&records) {
        println!(
            "{category} ({}): {} record(s)",
            category_description(category).unwrap_or("no description"),
            members.len()
        );
    }

    println!("\n=== Search ===\n");
    let query = SearchQuery::new().title("Design Patterns");
    let results = catalog.search(&query);
    println!("Criteria: {}", query.describe());
    println!("Matches Found: {}", results.len());
    for record in results.iter() {
        println!("  {}", summarize(record));
    }

    println!("\n=== Add and Update ===\n");
    let total = catalog.add([CatalogRecord::builder()
        .id(5)
        .title("Refactoring")
        .author("Martin Fowler")
        .publication_year(1999)
        .category("Programming")
        .availability(Availability::available_at("B1-07"))
        .build()]);
    println!("Catalog now holds {total} records");
    let updated = catalog.update_record(
        &RecordKey::id(3),
        &CatalogRecord::builder()
            .availability(Availability::available_at("C4-12"))
            .build(),
    );
    println!("Updated record 3: {updated}");
    println!(
        "Available: {}%",
        catalog.statistics().percentage_available
    );

    println!("\n=== Formatter and Memoization ===\n");
    let formatter = make_formatter(None);
    for line in formatter.format_all(&records[..1]) {
        println!("{line}");
    }
    let memoized = memoize("summarize", |record: &CatalogRecord| {
        Ok::<_, Infallible>(summarize(record))
    });
    println!("{}", memoized.call(&records[0])?);
    println!("(cached call)");
    println!("{}", memoized.call(&records[0])?);

    println!("\n=== Titles ===\n");
    for title in titles(&records) {
        println!("- {}", title.unwrap_or("Unknown Title"));
    }

    println!("\n=== Analysis ===\n");
    let report = analysis::analyze(catalog.records(), &catalog.config().unknown_category_label);
    for (decade, count) in &report.decades {
        println!("{decade}s: {count} record(s)");
    }
    if let Some((decade, count)) = report.most_common_decade {
        println!("Most common decade: {decade}s ({count} records)");
    }

    Ok(())
}
