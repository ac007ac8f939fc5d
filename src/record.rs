//! Catalog record structures.
//!
//! This module provides the core record types for the catalog:
//! - [`CatalogRecord`] — One entry in the collection (a book)
//! - [`Availability`] — The checkout/shelf substructure of a record
//! - [`AvailabilityStatus`] — Where the copy currently is
//!
//! Every field of a record is optional. Code reading records must treat a
//! missing title, author, year, category or availability as an ordinary case.
//!
//! # Examples
//!
//! ```
//! use shelfcat::{Availability, CatalogRecord};
//!
//! let record = CatalogRecord::builder()
//!     .id(1)
//!     .title("The Clean Coder")
//!     .author("Robert C. Martin")
//!     .publication_year(2011)
//!     .category("Programming")
//!     .availability(Availability::available_at("A1-23"))
//!     .build();
//!
//! assert_eq!(record.title(), Some("The Clean Coder"));
//! assert!(record.is_available());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability status of a catalog record.
///
/// The textual form is what appears in JSON: `"available"`, `"checked_out"`,
/// or any other text, which is kept verbatim in [`AvailabilityStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AvailabilityStatus {
    /// On the shelf.
    Available,
    /// Lent out.
    CheckedOut,
    /// Any other status text, e.g. `"unknown"`.
    Other(String),
}

impl AvailabilityStatus {
    /// Returns the raw status text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::CheckedOut => "checked_out",
            Self::Other(text) => text,
        }
    }

    /// Returns true when the status carries no text at all.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Other(text) if text.is_empty())
    }
}

impl From<&str> for AvailabilityStatus {
    fn from(text: &str) -> Self {
        match text {
            "available" => Self::Available,
            "checked_out" => Self::CheckedOut,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for AvailabilityStatus {
    fn from(text: String) -> Self {
        match text.as_str() {
            "available" => Self::Available,
            "checked_out" => Self::CheckedOut,
            _ => Self::Other(text),
        }
    }
}

impl From<AvailabilityStatus> for String {
    fn from(status: AvailabilityStatus) -> Self {
        match status {
            AvailabilityStatus::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The checkout/shelf substructure of a record.
///
/// A well-formed value carries `location` only when available and `due_date`
/// only when checked out. This is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Current status, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AvailabilityStatus>,
    /// Shelf location (present when available)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Due date (present when checked out)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl Availability {
    /// An available copy shelved at `location`.
    #[must_use]
    pub fn available_at(location: impl Into<String>) -> Self {
        Availability {
            status: Some(AvailabilityStatus::Available),
            location: Some(location.into()),
            due_date: None,
        }
    }

    /// A checked-out copy due back on `due_date`.
    #[must_use]
    pub fn checked_out_until(due_date: impl Into<String>) -> Self {
        Availability {
            status: Some(AvailabilityStatus::CheckedOut),
            location: None,
            due_date: Some(due_date.into()),
        }
    }

    /// Availability with only a status and no detail fields.
    #[must_use]
    pub fn with_status(status: impl Into<AvailabilityStatus>) -> Self {
        Availability {
            status: Some(status.into()),
            ..Self::default()
        }
    }
}

/// One entry in the catalog.
///
/// Field order matches the JSON form; the legacy `genre`
/// and `year` keys are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Identifier, unique within a store by convention
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Year of publication
    #[serde(default, alias = "year", skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    /// Category (genre)
    #[serde(default, alias = "genre", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Checkout/shelf information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
}

impl CatalogRecord {
    /// Create a builder for fluently constructing records
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder {
            record: CatalogRecord::default(),
        }
    }

    /// Get the title
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get the author
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Get the category
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Get the availability status, if the record has one
    #[must_use]
    pub fn status(&self) -> Option<&AvailabilityStatus> {
        self.availability.as_ref().and_then(|a| a.status.as_ref())
    }

    /// Check whether the record's status equals `status`.
    ///
    /// Records without availability, or without a status, never match.
    #[must_use]
    pub fn has_status(&self, status: &AvailabilityStatus) -> bool {
        self.status() == Some(status)
    }

    /// Check if this record is on the shelf
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.has_status(&AvailabilityStatus::Available)
    }

    /// Check if this record is lent out
    #[must_use]
    pub fn is_checked_out(&self) -> bool {
        self.has_status(&AvailabilityStatus::CheckedOut)
    }
}

/// Builder for fluently constructing [`CatalogRecord`]s
#[derive(Debug)]
pub struct RecordBuilder {
    record: CatalogRecord,
}

impl RecordBuilder {
    /// Set the identifier
    #[must_use]
    pub fn id(mut self, id: u64) -> Self {
        self.record.id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.record.title = Some(title.into());
        self
    }

    /// Set the author
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.record.author = Some(author.into());
        self
    }

    /// Set the publication year
    #[must_use]
    pub fn publication_year(mut self, year: i32) -> Self {
        self.record.publication_year = Some(year);
        self
    }

    /// Set the category
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.record.category = Some(category.into());
        self
    }

    /// Set the availability substructure
    #[must_use]
    pub fn availability(mut self, availability: Availability) -> Self {
        self.record.availability = Some(availability);
        self
    }

    /// Build the record
    #[must_use]
    pub fn build(self) -> CatalogRecord {
        self.record
    }
}
