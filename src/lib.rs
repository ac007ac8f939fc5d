#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Shelfcat: a small library catalog
//!
//! An in-memory catalog of book records with status filtering, category
//! grouping, cached search and statistics.
//!
//! ## Quick Start
//!
//! ```
//! use shelfcat::{store, AvailabilityStatus, CatalogManager, SearchQuery};
//! use shelfcat::query::{filter_by_status, group_by_category, summarize};
//!
//! let records = store::sample_records();
//!
//! // Pure queries borrow the records
//! let available = filter_by_status(&records, &AvailabilityStatus::Available);
//! assert_eq!(available.len(), 2);
//! assert_eq!(group_by_category(&records).len(), 2);
//! println!("{}", summarize(&records[0]));
//!
//! // The manager owns its own copy
//! let mut catalog = CatalogManager::new(records);
//! let stats = catalog.statistics();
//! assert_eq!((stats.total, stats.available, stats.checked_out), (4, 2, 1));
//! assert_eq!(stats.percentage_available, 50);
//!
//! let hits = catalog.search(&SearchQuery::new().title("design patterns"));
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`record`] — Catalog record structures (`CatalogRecord`, `Availability`)
//! - [`store`] — Sample records and static lookup tables
//! - [`query`] — Pure filtering, grouping, summaries and the title sequence
//! - [`search`] — Search criteria and their normalized cache key
//! - [`statistics`] — Status counts and statistics reports
//! - [`catalog`] — The stateful catalog manager
//! - [`shared`] — Mutex-guarded manager for concurrent callers
//! - [`format`] — Record formatters and availability labels
//! - [`memoize`] — Memoization of fallible functions
//! - [`analysis`] — Decade and category analysis
//! - [`json`] — Lenient and strict JSON decoding, file loading
//! - [`config`] — Manager configuration
//! - [`error`] — Error types and result type

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod json;
pub mod memoize;
pub mod query;
/// Catalog record structures (`CatalogRecord`, `Availability`, `AvailabilityStatus`)
pub mod record;
pub mod search;
pub mod shared;
pub mod statistics;
pub mod store;

pub use analysis::CollectionAnalysis;
pub use catalog::{CatalogManager, RecordKey};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use format::{make_formatter, RecordFormatter};
pub use memoize::{memoize, Memoized};
pub use query::{TitleSequence, Titles};
pub use record::{Availability, AvailabilityStatus, CatalogRecord, RecordBuilder};
pub use search::{SearchKey, SearchQuery};
pub use shared::SharedCatalog;
pub use statistics::{CatalogStatistics, StatusCounts};
