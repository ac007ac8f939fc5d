//! Collection analysis: availability split, publication decades and
//! category distribution.
//!
//! # Examples
//!
//! ```
//! use shelfcat::{analysis, store};
//!
//! let report = analysis::analyze(&store::sample_records(), "Unknown");
//! assert_eq!(report.decades[&2010], 3);
//! assert_eq!(report.most_common_decade, Some((2010, 3)));
//! ```

use crate::record::CatalogRecord;
use crate::statistics::StatusCounts;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Result of [`analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionAnalysis {
    /// Status split of the collection
    pub counts: StatusCounts,
    /// Records per publication decade, ascending
    pub decades: BTreeMap<i32, usize>,
    /// Decade with the most records and its count; the earliest decade wins ties
    pub most_common_decade: Option<(i32, usize)>,
    /// Records per category, in first-seen order. Only a missing category is
    /// counted as unknown; an empty one keeps its own bucket.
    pub categories: IndexMap<String, usize>,
}

/// The decade a year falls in, e.g. `1994 -> 1990`.
#[must_use]
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Analyze `records`. Records without a year are left out of the decade
/// counts; records without a category are counted under `unknown_label`.
#[must_use]
pub fn analyze(records: &[CatalogRecord], unknown_label: &str) -> CollectionAnalysis {
    let mut decades: BTreeMap<i32, usize> = BTreeMap::new();
    for year in records.iter().filter_map(|r| r.publication_year) {
        *decades.entry(decade_of(year)).or_insert(0) += 1;
    }

    let mut most_common_decade: Option<(i32, usize)> = None;
    for (&decade, &count) in &decades {
        if most_common_decade.map_or(true, |(_, best)| count > best) {
            most_common_decade = Some((decade, count));
        }
    }

    CollectionAnalysis {
        counts: StatusCounts::from_records(records),
        decades,
        most_common_decade,
        categories: category_distribution(records, unknown_label),
    }
}

fn category_distribution(records: &[CatalogRecord], unknown_label: &str) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for record in records {
        let category = record.category().unwrap_or(unknown_label);
        *counts.entry(category.to_string()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_records;

    #[test]
    fn test_decade_of() {
        assert_eq!(decade_of(1994), 1990);
        assert_eq!(decade_of(2000), 2000);
        assert_eq!(decade_of(-5), -10);
    }

    #[test]
    fn test_analyze_sample() {
        let report = analyze(&sample_records(), "Unknown");
        let decades: Vec<(i32, usize)> = report.decades.iter().map(|(d, c)| (*d, *c)).collect();
        assert_eq!(decades, vec![(1990, 1), (2010, 3)]);
        assert_eq!(report.counts.available, 2);
        assert_eq!(report.categories["Software Engineering"], 1);
    }

    #[test]
    fn test_decades_ascend_and_earliest_wins_ties() {
        let records = vec![
            CatalogRecord::builder().publication_year(2003).build(),
            CatalogRecord::builder().publication_year(1985).build(),
            CatalogRecord::default(),
        ];
        let report = analyze(&records, "Unknown");
        let keys: Vec<i32> = report.decades.keys().copied().collect();
        assert_eq!(keys, vec![1980, 2000]);
        assert_eq!(report.most_common_decade, Some((1980, 1)));
    }

    #[test]
    fn test_empty_category_keeps_its_own_bucket() {
        let records = vec![
            CatalogRecord::builder().category("").build(),
            CatalogRecord::default(),
            CatalogRecord::builder().category("Programming").build(),
        ];
        let report = analyze(&records, "Unknown");
        assert_eq!(report.categories[""], 1);
        assert_eq!(report.categories["Unknown"], 1);
        assert_eq!(report.categories["Programming"], 1);
    }

    #[test]
    fn test_empty_collection() {
        let report = analyze(&[], "Unknown");
        assert_eq!(report.most_common_decade, None);
        assert!(report.categories.is_empty());
    }
}
