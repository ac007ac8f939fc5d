//! Record formatting helpers.
//!
//! [`make_formatter`] turns a per-record formatting function into a
//! [`RecordFormatter`] that maps whole collections to text, substituting a
//! default line wherever the function comes back empty.
//!
//! # Examples
//!
//! ```
//! use shelfcat::format::{make_formatter, RecordFormatter};
//! use shelfcat::store;
//!
//! let records = store::sample_records();
//!
//! let default = make_formatter(None);
//! assert_eq!(
//!     default.format(&records[0]),
//!     "The Clean Coder by Robert C. Martin (Programming)"
//! );
//!
//! let years = RecordFormatter::new(|r| {
//!     r.publication_year.map(|y| y.to_string()).unwrap_or_default()
//! });
//! assert_eq!(years.format_all(&records)[2], "1994");
//! ```

use crate::error::{CatalogError, Result};
use crate::json::record_from_value;
use crate::query::{UNKNOWN_AUTHOR, UNKNOWN_TITLE};
use crate::record::{Availability, AvailabilityStatus, CatalogRecord};
use serde_json::Value;
use std::fmt;

/// Placeholder for a missing category in the default formatter.
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

/// A per-record formatting function.
pub type FormatFn = dyn Fn(&CatalogRecord) -> String + Send + Sync;

/// Maps records to display lines with a fixed formatting function.
pub struct RecordFormatter {
    formatter: Box<FormatFn>,
}

impl fmt::Debug for RecordFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordFormatter").finish_non_exhaustive()
    }
}

impl Default for RecordFormatter {
    fn default() -> Self {
        Self::new(default_line)
    }
}

/// Build a formatter from `formatter`, or the default
/// `{title} by {author} ({category})` formatter when none is given.
#[must_use]
pub fn make_formatter(formatter: Option<Box<FormatFn>>) -> RecordFormatter {
    match formatter {
        Some(formatter) => RecordFormatter { formatter },
        None => RecordFormatter::default(),
    }
}

impl RecordFormatter {
    /// Wrap a formatting function.
    pub fn new<F>(formatter: F) -> Self
    where
        F: Fn(&CatalogRecord) -> String + Send + Sync + 'static,
    {
        RecordFormatter {
            formatter: Box::new(formatter),
        }
    }

    /// Format one record.
    ///
    /// An empty result from the wrapped function is replaced with
    /// `{title} by {author}`, using placeholders for missing values.
    #[must_use]
    pub fn format(&self, record: &CatalogRecord) -> String {
        let line = (self.formatter)(record);
        if line.is_empty() {
            fallback_line(record)
        } else {
            line
        }
    }

    /// Format every record, in order.
    #[must_use]
    pub fn format_all(&self, records: &[CatalogRecord]) -> Vec<String> {
        records.iter().map(|r| self.format(r)).collect()
    }

    /// Format a loosely-typed JSON array of records.
    ///
    /// Elements are decoded leniently, so a malformed element still yields a
    /// line.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`] if `value` is not an array.
    pub fn format_value(&self, value: &Value) -> Result<Vec<String>> {
        let Value::Array(items) = value else {
            return Err(CatalogError::InvalidArgument(
                "expected an array of records".to_string(),
            ));
        };
        Ok(items
            .iter()
            .map(|item| self.format(&record_from_value(item)))
            .collect())
    }
}

fn default_line(record: &CatalogRecord) -> String {
    format!(
        "{} by {} ({})",
        record.title().unwrap_or(UNKNOWN_TITLE),
        record.author().unwrap_or(UNKNOWN_AUTHOR),
        record.category().unwrap_or(UNKNOWN_CATEGORY)
    )
}

fn fallback_line(record: &CatalogRecord) -> String {
    format!(
        "{} by {}",
        record.title().filter(|t| !t.is_empty()).unwrap_or(UNKNOWN_TITLE),
        record.author().filter(|a| !a.is_empty()).unwrap_or(UNKNOWN_AUTHOR)
    )
}

/// Short availability label for listings.
///
/// `Available — Shelf: {location}`, `Checked Out — Due: {due date}`, or
/// `Availability Unknown` for anything else, including no availability.
#[must_use]
pub fn format_availability(availability: Option<&Availability>) -> String {
    let Some(availability) = availability else {
        return "Availability Unknown".to_string();
    };
    match availability.status {
        Some(AvailabilityStatus::Available) => format!(
            "Available — Shelf: {}",
            availability.location.as_deref().unwrap_or("Unknown location")
        ),
        Some(AvailabilityStatus::CheckedOut) => format!(
            "Checked Out — Due: {}",
            availability.due_date.as_deref().unwrap_or("Unknown due date")
        ),
        _ => "Availability Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_records;
    use serde_json::json;

    #[test]
    fn test_empty_output_falls_back() {
        let formatter = RecordFormatter::new(|_| String::new());
        let records = vec![
            sample_records().remove(1),
            CatalogRecord::builder().author("Anonymous").build(),
        ];
        assert_eq!(
            formatter.format_all(&records),
            vec![
                "You Don't Know JS by Kyle Simpson".to_string(),
                "Unknown Title by Anonymous".to_string(),
            ]
        );
    }

    #[test]
    fn test_make_formatter_with_custom_function() {
        let formatter = make_formatter(Some(Box::new(|r: &CatalogRecord| {
            format!("** {}", r.title().unwrap_or_default())
        })));
        assert_eq!(formatter.format(&sample_records()[3]), "** Clean Architecture");
    }

    #[test]
    fn test_default_formatter_placeholders() {
        let formatter = make_formatter(None);
        assert_eq!(
            formatter.format(&CatalogRecord::default()),
            "Unknown Title by Unknown Author (Unknown Category)"
        );
    }

    #[test]
    fn test_format_value_rejects_non_array() {
        let formatter = RecordFormatter::default();
        let err = formatter.format_value(&json!({"title": "x"})).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
        assert!(formatter.format_value(&json!("books")).is_err());
    }

    #[test]
    fn test_format_value_formats_elements() {
        let formatter = RecordFormatter::default();
        let lines = formatter
            .format_value(&json!([
                {"title": "Refactoring", "author": "Martin Fowler", "genre": "Programming"},
                42
            ]))
            .unwrap();
        assert_eq!(lines[0], "Refactoring by Martin Fowler (Programming)");
        assert_eq!(lines[1], "Unknown Title by Unknown Author (Unknown Category)");
    }

    #[test]
    fn test_format_availability() {
        let records = sample_records();
        assert_eq!(
            format_availability(records[0].availability.as_ref()),
            "Available — Shelf: A1-23"
        );
        assert_eq!(
            format_availability(records[1].availability.as_ref()),
            "Checked Out — Due: 2024-12-01"
        );
        assert_eq!(format_availability(None), "Availability Unknown");
        assert_eq!(
            format_availability(Some(&Availability::with_status("lost"))),
            "Availability Unknown"
        );
    }
}
