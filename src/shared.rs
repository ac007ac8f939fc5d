//! Thread-safe handle to a catalog manager.
//!
//! [`CatalogManager`] operations are not atomic with respect to each other,
//! so concurrent callers share it through a [`SharedCatalog`], which guards
//! the records, status snapshot and search cache with one mutex.
//!
//! # Examples
//!
//! ```
//! use shelfcat::{store, CatalogRecord, SharedCatalog};
//! use std::thread;
//!
//! let catalog = SharedCatalog::new(store::sample_records());
//! let handles: Vec<_> = (0..4u64)
//!     .map(|i| {
//!         let catalog = catalog.clone();
//!         thread::spawn(move || catalog.add([CatalogRecord::builder().id(10 + i).build()]))
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(catalog.statistics().total, 8);
//! ```

use crate::catalog::{CatalogManager, RecordKey};
use crate::record::CatalogRecord;
use crate::search::SearchQuery;
use crate::statistics::CatalogStatistics;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, mutex-guarded [`CatalogManager`].
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<CatalogManager>>,
}

impl SharedCatalog {
    /// Create a shared catalog seeded with `records`.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = CatalogRecord>) -> Self {
        Self::from_manager(CatalogManager::new(records))
    }

    /// Wrap an existing manager.
    #[must_use]
    pub fn from_manager(manager: CatalogManager) -> Self {
        SharedCatalog {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    // Manager operations finish before the guard drops; a poisoned lock
    // still holds a consistent manager.
    fn lock(&self) -> MutexGuard<'_, CatalogManager> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access, for multi-step operations.
    pub fn with<R>(&self, f: impl FnOnce(&mut CatalogManager) -> R) -> R {
        f(&mut self.lock())
    }

    /// See [`CatalogManager::add`].
    pub fn add(&self, records: impl IntoIterator<Item = CatalogRecord>) -> usize {
        self.lock().add(records)
    }

    /// See [`CatalogManager::search`].
    pub fn search(&self, query: &SearchQuery) -> Arc<Vec<CatalogRecord>> {
        self.lock().search(query)
    }

    /// See [`CatalogManager::statistics`].
    #[must_use]
    pub fn statistics(&self) -> CatalogStatistics {
        self.lock().statistics()
    }

    /// See [`CatalogManager::update_record`].
    pub fn update_record(&self, key: &RecordKey, updates: &CatalogRecord) -> bool {
        self.lock().update_record(key, updates)
    }

    /// Copy of the current records.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CatalogRecord> {
        self.lock().records().to_vec()
    }
}
