//! The catalog manager: the only stateful component of the crate.
//!
//! A [`CatalogManager`] owns an ordered collection of records, a status
//! snapshot and a search result cache. Every mutation ([`CatalogManager::add`],
//! a successful [`CatalogManager::update_record`]) clears the cache and
//! recomputes the snapshot before returning, so reads never observe stale
//! derived state.
//!
//! # Examples
//!
//! ```
//! use shelfcat::{store, Availability, CatalogManager, CatalogRecord, RecordKey, SearchQuery};
//! use std::sync::Arc;
//!
//! let mut catalog = CatalogManager::new(store::sample_records());
//!
//! let first = catalog.search(&SearchQuery::new().title("clean"));
//! let again = catalog.search(&SearchQuery::new().title("CLEAN"));
//! assert!(Arc::ptr_eq(&first, &again));
//!
//! let total = catalog.add([CatalogRecord::builder()
//!     .title("Refactoring")
//!     .availability(Availability::available_at("B1-07"))
//!     .build()]);
//! assert_eq!(total, 5);
//! assert_eq!(catalog.statistics().available, 3);
//!
//! let found = catalog.update_record(
//!     &RecordKey::id(3),
//!     &CatalogRecord::builder().title("Ignored, already set").build(),
//! );
//! assert!(found);
//! ```

use crate::config::CatalogConfig;
use crate::record::{Availability, AvailabilityStatus, CatalogRecord};
use crate::search::{SearchKey, SearchQuery};
use crate::statistics::{CatalogStatistics, StatusCounts};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Stateful owner of a record collection.
///
/// The record sequence, status snapshot and search cache are private; callers
/// get read-only views and mutate only through the manager's operations.
#[derive(Debug, Clone, Default)]
pub struct CatalogManager {
    records: Vec<CatalogRecord>,
    counts: StatusCounts,
    search_cache: HashMap<SearchKey, Arc<Vec<CatalogRecord>>>,
    config: CatalogConfig,
}

impl CatalogManager {
    /// Create a manager seeded with `records`, using the default configuration.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = CatalogRecord>) -> Self {
        Self::with_config(records, CatalogConfig::default())
    }

    /// Create a manager seeded with `records` and an explicit configuration.
    #[must_use]
    pub fn with_config(
        records: impl IntoIterator<Item = CatalogRecord>,
        config: CatalogConfig,
    ) -> Self {
        let records: Vec<CatalogRecord> = records.into_iter().collect();
        let counts = StatusCounts::from_records(&records);
        CatalogManager {
            records,
            counts,
            search_cache: HashMap::new(),
            config,
        }
    }

    /// The records, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The status snapshot, as of the last mutation.
    #[must_use]
    pub fn status_counts(&self) -> StatusCounts {
        self.counts
    }

    /// Number of distinct queries currently cached.
    #[must_use]
    pub fn cached_queries(&self) -> usize {
        self.search_cache.len()
    }

    /// Append records, keeping their order, and return the new total.
    pub fn add(&mut self, records: impl IntoIterator<Item = CatalogRecord>) -> usize {
        let before = self.records.len();
        self.records.extend(records);
        debug!(
            added = self.records.len() - before,
            total = self.records.len(),
            "records added"
        );
        self.refresh();
        self.records.len()
    }

    /// Records matching every criterion of `query`.
    ///
    /// Results are cached by the query's normalized [`SearchKey`]: repeating a
    /// query (including a differently-cased one, when case-insensitive)
    /// returns the same `Arc` until the next mutation.
    pub fn search(&mut self, query: &SearchQuery) -> Arc<Vec<CatalogRecord>> {
        let key = query.key();
        if let Some(cached) = self.search_cache.get(&key) {
            trace!(?key, "search cache hit");
            return Arc::clone(cached);
        }

        let results: Arc<Vec<CatalogRecord>> = Arc::new(
            self.records
                .iter()
                .filter(|r| key.matches(r))
                .cloned()
                .collect(),
        );
        debug!(?key, matches = results.len(), "search computed");

        if self.config.cache_searches {
            self.search_cache.insert(key, Arc::clone(&results));
        }
        results
    }

    /// Full statistics report for the current records.
    #[must_use]
    pub fn statistics(&self) -> CatalogStatistics {
        CatalogStatistics::compute(
            self.counts,
            &self.records,
            &self.config.unknown_category_label,
        )
    }

    /// Fill the empty fields of a stored record from `updates`.
    ///
    /// The target is located by [`RecordKey`]. Populated fields are kept;
    /// see [`merge_missing`] for the per-field rules. Returns `false` when no
    /// record matches, in which case nothing changes.
    pub fn update_record(&mut self, key: &RecordKey, updates: &CatalogRecord) -> bool {
        let Some(index) = key.locate(&self.records) else {
            debug!(?key, "update target not found");
            return false;
        };

        merge_missing(&mut self.records[index], updates);
        debug!(index, "record updated");
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        if !self.search_cache.is_empty() {
            trace!(entries = self.search_cache.len(), "search cache cleared");
        }
        self.search_cache.clear();
        self.counts = StatusCounts::from_records(&self.records);
    }
}

/// How [`CatalogManager::update_record`] finds its target.
///
/// Lookups are tried in priority order: position in the catalog, then
/// identifier, then title and author together. Each lookup picks the first
/// matching record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordKey {
    position: Option<usize>,
    id: Option<u64>,
    title_author: Option<(Option<String>, Option<String>)>,
}

impl RecordKey {
    /// Match the record at `index` in [`CatalogManager::records`].
    #[must_use]
    pub fn position(index: usize) -> Self {
        RecordKey {
            position: Some(index),
            ..Self::default()
        }
    }

    /// Match the first record with identifier `id`.
    #[must_use]
    pub fn id(id: u64) -> Self {
        RecordKey {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Match the first record with exactly this title and author.
    #[must_use]
    pub fn title_author(title: impl Into<String>, author: impl Into<String>) -> Self {
        RecordKey {
            title_author: Some((Some(title.into()), Some(author.into()))),
            ..Self::default()
        }
    }

    /// Key describing `record`: its identifier, then its title and author.
    ///
    /// A record with neither title nor author contributes no title/author lookup.
    #[must_use]
    pub fn of(record: &CatalogRecord) -> Self {
        let title_author = if record.title.is_some() || record.author.is_some() {
            Some((record.title.clone(), record.author.clone()))
        } else {
            None
        };
        RecordKey {
            position: None,
            id: record.id,
            title_author,
        }
    }

    fn locate(&self, records: &[CatalogRecord]) -> Option<usize> {
        if let Some(index) = self.position.filter(|&i| i < records.len()) {
            return Some(index);
        }
        if let Some(id) = self.id {
            if let Some(index) = records.iter().position(|r| r.id == Some(id)) {
                return Some(index);
            }
        }
        let (title, author) = self.title_author.as_ref()?;
        records
            .iter()
            .position(|r| r.title == *title && r.author == *author)
    }
}

/// Merge `updates` into `target` without overwriting populated fields.
///
/// The rules differ per field and are kept that way on purpose:
/// - `title`, `category`, `publication_year`: assigned only when absent.
/// - `author`: assigned when absent *or empty*; an empty author is replaced
///   by whatever `updates` carries, even nothing.
/// - `availability`: created empty if missing, then `location` and
///   `due_date` are assigned only when absent, and `status` is assigned when
///   absent or blank, taking the incoming status if it is non-blank and
///   `available` otherwise.
pub fn merge_missing(target: &mut CatalogRecord, updates: &CatalogRecord) {
    if target.title.is_none() {
        target.title.clone_from(&updates.title);
    }
    if target.category.is_none() {
        target.category.clone_from(&updates.category);
    }
    if target.publication_year.is_none() {
        target.publication_year = updates.publication_year;
    }

    if target.author.as_deref().map_or(true, str::is_empty) {
        target.author.clone_from(&updates.author);
    }

    let incoming = updates.availability.as_ref();
    let availability = target.availability.get_or_insert_with(Availability::default);
    if availability.location.is_none() {
        availability.location = incoming.and_then(|a| a.location.clone());
    }
    if availability.due_date.is_none() {
        availability.due_date = incoming.and_then(|a| a.due_date.clone());
    }
    if availability.status.as_ref().map_or(true, AvailabilityStatus::is_blank) {
        let status = incoming
            .and_then(|a| a.status.clone())
            .filter(|s| !s.is_blank())
            .unwrap_or(AvailabilityStatus::Available);
        availability.status = Some(status);
    }
}
