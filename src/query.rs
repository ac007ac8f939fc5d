//! Pure query functions over slices of catalog records.
//!
//! Nothing in this module holds state; every function borrows its input and
//! returns references into it, so results always reflect the slice as it is
//! at call time.
//!
//! # Examples
//!
//! ```
//! use shelfcat::query::{filter_by_status, group_by_category, summarize};
//! use shelfcat::{store, AvailabilityStatus};
//!
//! let records = store::sample_records();
//!
//! let available = filter_by_status(&records, &AvailabilityStatus::Available);
//! assert_eq!(available.len(), 2);
//!
//! let groups = group_by_category(&records);
//! assert_eq!(groups["Programming"].len(), 3);
//!
//! assert_eq!(
//!     summarize(&records[0]),
//!     "The Clean Coder by Robert C. Martin (2011) - Status: Available at A1-23"
//! );
//! ```

use crate::record::{AvailabilityStatus, CatalogRecord};
use indexmap::IndexMap;
use std::iter::FusedIterator;

/// Placeholder for a missing title.
pub const UNKNOWN_TITLE: &str = "Unknown Title";
/// Placeholder for a missing author.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
/// Placeholder for a missing publication year.
pub const UNKNOWN_YEAR: &str = "Unknown Year";
/// Placeholder for a missing shelf location.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
/// Placeholder for a missing due date.
pub const UNKNOWN_TIME: &str = "Unknown Time";
/// Placeholder for a missing status.
pub const UNKNOWN_STATUS: &str = "Unknown";

/// Summary produced for input that is not a record at all.
pub const UNKNOWN_RECORD_SUMMARY: &str =
    "Unknown Title by Unknown Author (Unknown Year) - Status: Unknown";

/// Records whose availability status equals `status`, in input order.
///
/// Records without availability (or without a status) never match.
#[must_use]
pub fn filter_by_status<'a>(
    records: &'a [CatalogRecord],
    status: &AvailabilityStatus,
) -> Vec<&'a CatalogRecord> {
    records.iter().filter(|r| r.has_status(status)).collect()
}

/// Group records by category.
///
/// Groups appear in the order their category is first seen, and records keep
/// their input order within a group. Records without a category (or with an
/// empty one) are left out of every group.
#[must_use]
pub fn group_by_category(records: &[CatalogRecord]) -> IndexMap<&str, Vec<&CatalogRecord>> {
    let mut groups: IndexMap<&str, Vec<&CatalogRecord>> = IndexMap::new();
    for record in records {
        if let Some(category) = record.category().filter(|c| !c.is_empty()) {
            groups.entry(category).or_default().push(record);
        }
    }
    groups
}

/// Describe a record in one line.
///
/// Format: `{title} by {author} ({year}) - Status: {availability}` where the
/// availability part is `Available at {location}` for available records,
/// `Checked Out And Due at {due date}` for checked-out ones, and the raw status
/// text otherwise. Status matching ignores case. Missing pieces fall back to
/// the `UNKNOWN_*` placeholders, so the result is never empty.
#[must_use]
pub fn summarize(record: &CatalogRecord) -> String {
    let title = record.title().unwrap_or(UNKNOWN_TITLE);
    let author = record.author().unwrap_or(UNKNOWN_AUTHOR);
    let year = record
        .publication_year
        .map_or_else(|| UNKNOWN_YEAR.to_string(), |y| y.to_string());

    let availability = record.availability.as_ref();
    let status = availability
        .and_then(|a| a.status.as_ref())
        .map_or(UNKNOWN_STATUS, AvailabilityStatus::as_str);

    let detail = match status.to_lowercase().as_str() {
        "available" => {
            let location = availability
                .and_then(|a| a.location.as_deref())
                .filter(|l| !l.is_empty())
                .unwrap_or(UNKNOWN_LOCATION);
            format!("Available at {location}")
        },
        "checked_out" => {
            let due = availability
                .and_then(|a| a.due_date.as_deref())
                .filter(|d| !d.is_empty())
                .unwrap_or(UNKNOWN_TIME);
            format!("Checked Out And Due at {due}")
        },
        _ => status.to_string(),
    };

    format!("{title} by {author} ({year}) - Status: {detail}")
}

/// A restartable sequence of record titles.
///
/// Each call to [`TitleSequence::iter`] starts over from the first record.
#[derive(Debug, Clone, Copy)]
pub struct TitleSequence<'a> {
    records: &'a [CatalogRecord],
}

/// Build the title sequence for `records`.
#[must_use]
pub fn titles(records: &[CatalogRecord]) -> TitleSequence<'_> {
    TitleSequence { records }
}

impl<'a> TitleSequence<'a> {
    /// Start a fresh pass over the titles.
    #[must_use]
    pub fn iter(&self) -> Titles<'a> {
        Titles {
            inner: self.records.iter(),
        }
    }

    /// Number of titles the sequence yields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the sequence yields nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for TitleSequence<'a> {
    type Item = Option<&'a str>;
    type IntoIter = Titles<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &TitleSequence<'a> {
    type Item = Option<&'a str>;
    type IntoIter = Titles<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over titles, one item per record.
///
/// Yields `None` for a record without a title.
#[derive(Debug, Clone)]
pub struct Titles<'a> {
    inner: std::slice::Iter<'a, CatalogRecord>,
}

impl<'a> Iterator for Titles<'a> {
    type Item = Option<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(CatalogRecord::title)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Titles<'_> {}

impl FusedIterator for Titles<'_> {}
