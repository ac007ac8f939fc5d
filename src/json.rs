//! JSON input and output for catalog records.
//!
//! Two decoding modes are offered:
//! - **Lenient** ([`record_from_value`], [`records_from_value`],
//!   [`records_from_json`], [`load_records`]): a value of the wrong type is
//!   treated as an absent field, and a non-object element becomes an empty
//!   record. A record is never rejected for missing or odd fields.
//! - **Strict** ([`record_from_value_strict`]): the value must deserialize
//!   into a [`CatalogRecord`] as-is.
//!
//! Where a whole sequence is required, a non-array is an
//! [`CatalogError::InvalidArgument`] error, except for
//! [`filter_by_status_value`], which answers with an empty result.
//!
//! # Examples
//!
//! ```
//! use shelfcat::json;
//! use serde_json::json;
//!
//! let records = json::records_from_value(&json!([
//!     {"id": 7, "title": "Refactoring", "year": "1999", "genre": "Programming"}
//! ]))?;
//! assert_eq!(records[0].publication_year, None); // a string is not a year
//! assert_eq!(records[0].category(), Some("Programming"));
//!
//! assert_eq!(
//!     json::summarize_value(&json!(null)),
//!     "Unknown Title by Unknown Author (Unknown Year) - Status: Unknown"
//! );
//! # Ok::<(), shelfcat::CatalogError>(())
//! ```

use crate::error::{CatalogError, Result};
use crate::query::{summarize, UNKNOWN_RECORD_SUMMARY};
use crate::record::{Availability, AvailabilityStatus, CatalogRecord};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::warn;

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn string_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn availability_from_value(value: &Value) -> Option<Availability> {
    let object = value.as_object()?;
    Some(Availability {
        status: object
            .get("status")
            .and_then(Value::as_str)
            .map(AvailabilityStatus::from),
        location: string_field(object, &["location"]),
        due_date: string_field(object, &["dueDate", "due_date"]),
    })
}

/// Decode a record leniently.
///
/// Unknown keys are ignored, fields of the wrong type are absent, and a
/// non-object value yields an empty record. `genre` and `year` are accepted
/// in place of `category` and `publicationYear`.
#[must_use]
pub fn record_from_value(value: &Value) -> CatalogRecord {
    let Some(object) = value.as_object() else {
        return CatalogRecord::default();
    };

    let publication_year = ["publicationYear", "year"]
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_i64))
        .and_then(|year| i32::try_from(year).ok());

    CatalogRecord {
        id: object.get("id").and_then(Value::as_u64),
        title: string_field(object, &["title"]),
        author: string_field(object, &["author"]),
        publication_year,
        category: string_field(object, &["category", "genre"]),
        availability: object.get("availability").and_then(availability_from_value),
    }
}

/// Decode a record strictly.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRecord`] if `value` is not an object or a
/// field has the wrong type.
pub fn record_from_value_strict(value: &Value) -> Result<CatalogRecord> {
    if !value.is_object() {
        return Err(CatalogError::InvalidRecord(format!(
            "expected an object, found {}",
            kind_of(value)
        )));
    }
    CatalogRecord::deserialize(value).map_err(|e| CatalogError::InvalidRecord(e.to_string()))
}

/// Decode an array of records leniently.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidArgument`] if `value` is not an array.
pub fn records_from_value(value: &Value) -> Result<Vec<CatalogRecord>> {
    let Value::Array(items) = value else {
        return Err(CatalogError::InvalidArgument(format!(
            "expected an array of records, found {}",
            kind_of(value)
        )));
    };
    Ok(items.iter().map(record_from_value).collect())
}

/// Parse JSON text holding an array of records, decoding leniently.
///
/// # Errors
///
/// Returns an error if the text is not JSON or not an array.
pub fn records_from_json(text: &str) -> Result<Vec<CatalogRecord>> {
    let value: Value = serde_json::from_str(text)?;
    records_from_value(&value)
}

/// Read a JSON file holding an array of records, decoding leniently.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not JSON, or is not an array.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<CatalogRecord>> {
    let text = std::fs::read_to_string(path)?;
    records_from_json(&text)
}

/// Serialize records as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn records_to_json(records: &[CatalogRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Summarize any JSON value.
///
/// A non-object yields the fixed unknown-record summary; an object is
/// decoded leniently and summarized.
#[must_use]
pub fn summarize_value(value: &Value) -> String {
    if value.is_object() {
        summarize(&record_from_value(value))
    } else {
        UNKNOWN_RECORD_SUMMARY.to_string()
    }
}

/// Filter a JSON array of records by status.
///
/// A non-array input yields an empty result rather than an error.
#[must_use]
pub fn filter_by_status_value(value: &Value, status: &AvailabilityStatus) -> Vec<CatalogRecord> {
    let Value::Array(items) = value else {
        warn!(found = kind_of(value), "status filter expected an array");
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| item.is_object())
        .map(record_from_value)
        .filter(|record| record.has_status(status))
        .collect()
}
