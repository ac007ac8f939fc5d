//! The record store: sample catalog data and static lookup tables.
//!
//! [`sample_records`] returns the four-book collection the demo seeds its
//! manager with: two available, one checked out and one without availability
//! information.

use crate::record::{Availability, CatalogRecord};
use indexmap::{IndexMap, IndexSet};
use lazy_static::lazy_static;

lazy_static! {
    /// Descriptions of the known categories, in display order.
    pub static ref CATEGORY_DESCRIPTIONS: IndexMap<&'static str, &'static str> = {
        let mut m = IndexMap::new();
        m.insert(
            "Programming",
            "Books about programming languages and techniques",
        );
        m.insert(
            "Software Engineering",
            "Books about software design and architecture",
        );
        m
    };
}

/// Look up the description of a category.
#[must_use]
pub fn category_description(category: &str) -> Option<&'static str> {
    CATEGORY_DESCRIPTIONS.get(category).copied()
}

/// The sample collection.
#[must_use]
pub fn sample_records() -> Vec<CatalogRecord> {
    vec![
        CatalogRecord::builder()
            .id(1)
            .title("The Clean Coder")
            .author("Robert C. Martin")
            .publication_year(2011)
            .category("Programming")
            .availability(Availability::available_at("A1-23"))
            .build(),
        CatalogRecord::builder()
            .id(2)
            .title("You Don't Know JS")
            .author("Kyle Simpson")
            .publication_year(2014)
            .category("Programming")
            .availability(Availability::checked_out_until("2024-12-01"))
            .build(),
        // no availability on purpose
        CatalogRecord::builder()
            .id(3)
            .title("Design Patterns")
            .author("Gang of Four")
            .publication_year(1994)
            .category("Software Engineering")
            .build(),
        CatalogRecord::builder()
            .id(4)
            .title("Clean Architecture")
            .author("Robert C. Martin")
            .publication_year(2017)
            .category("Programming")
            .availability(Availability::available_at("A2-15"))
            .build(),
    ]
}

/// Distinct authors of `records`, in first-seen order.
///
/// Records without an author contribute nothing.
#[must_use]
pub fn unique_authors(records: &[CatalogRecord]) -> IndexSet<&str> {
    records.iter().filter_map(CatalogRecord::author).collect()
}
