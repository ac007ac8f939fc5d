//! Common test helpers and utilities shared across the test suite.

use shelfcat::{store, Availability, CatalogManager, CatalogRecord};

/// The four sample records.
pub fn sample() -> Vec<CatalogRecord> {
    store::sample_records()
}

/// A manager seeded with the sample records.
#[allow(dead_code)]
pub fn sample_catalog() -> CatalogManager {
    CatalogManager::new(sample())
}

/// An available record with the given id and title.
#[allow(dead_code)]
pub fn available_record(id: u64, title: &str) -> CatalogRecord {
    CatalogRecord::builder()
        .id(id)
        .title(title)
        .author("Test Author")
        .publication_year(2020)
        .category("Testing")
        .availability(Availability::available_at("T1-01"))
        .build()
}
