//! Catalog statistics.
//!
//! [`StatusCounts`] is the snapshot a catalog manager keeps up to date after
//! every mutation. [`CatalogStatistics`] is the full report built on demand
//! from a snapshot plus the records.
//!
//! Per-category percentages are taken against the total record count, not
//! against the number of categorized records. Uncategorized records are
//! counted under the configured unknown-category label, so the percentages
//! still add up to roughly 100.

use crate::record::CatalogRecord;
use crate::store::unique_authors;
use indexmap::IndexMap;
use serde::Serialize;

/// Status counts over a record collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    /// Number of records
    pub total: usize,
    /// Records whose status is `available`
    pub available: usize,
    /// Records whose status is `checked_out`
    pub checked_out: usize,
}

impl StatusCounts {
    /// Count statuses in `records`.
    #[must_use]
    pub fn from_records(records: &[CatalogRecord]) -> Self {
        let mut counts = StatusCounts {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            if record.is_available() {
                counts.available += 1;
            } else if record.is_checked_out() {
                counts.checked_out += 1;
            }
        }
        counts
    }
}

/// Full statistics report for a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatistics {
    /// Number of records
    pub total: usize,
    /// Records whose status is `available`
    pub available: usize,
    /// Records whose status is `checked_out`
    pub checked_out: usize,
    /// `available / total` as a rounded percentage, 0 for an empty catalog
    pub percentage_available: u32,
    /// Number of distinct authors
    pub unique_authors: usize,
    /// Record count per category, in first-seen order
    pub by_category: IndexMap<String, usize>,
    /// Rounded percentage of all records in each category
    pub category_percentages: IndexMap<String, u32>,
}

impl CatalogStatistics {
    /// Build the report from a status snapshot and the records it describes.
    #[must_use]
    pub fn compute(counts: StatusCounts, records: &[CatalogRecord], unknown_label: &str) -> Self {
        let by_category = category_counts(records, unknown_label);
        let category_percentages = by_category
            .iter()
            .map(|(category, &count)| (category.clone(), percentage(count, counts.total)))
            .collect();

        CatalogStatistics {
            total: counts.total,
            available: counts.available,
            checked_out: counts.checked_out,
            percentage_available: percentage(counts.available, counts.total),
            unique_authors: unique_authors(records).len(),
            by_category,
            category_percentages,
        }
    }

    /// The status counts part of the report.
    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        StatusCounts {
            total: self.total,
            available: self.available,
            checked_out: self.checked_out,
        }
    }
}

/// Record count per category; records without a category (or with an
/// empty one) go under `unknown_label`.
#[must_use]
pub fn category_counts(records: &[CatalogRecord], unknown_label: &str) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for record in records {
        let category = record
            .category()
            .filter(|c| !c.is_empty())
            .unwrap_or(unknown_label);
        *counts.entry(category.to_string()).or_insert(0) += 1;
    }
    counts
}

/// `part / total * 100`, rounded to the nearest integer; 0 when `total` is 0.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}
