//! Memoization of fallible functions.
//!
//! [`memoize`] wraps a function so that each distinct argument is computed
//! once. The cache key is `{name}:{arguments as JSON}`, so the JSON form of
//! the argument must be deterministic (serde's derive output for structs and
//! the ordered maps used in this crate are).
//!
//! Failed calls are not cached: the error is returned and the next call with
//! the same argument runs the function again. Successful results are kept
//! until [`Memoized::clear`].
//!
//! # Examples
//!
//! ```
//! use shelfcat::memoize::memoize;
//! use shelfcat::{query, store, CatalogRecord};
//! use std::convert::Infallible;
//!
//! let summary = memoize("summarize", |record: &CatalogRecord| {
//!     Ok::<_, Infallible>(query::summarize(record))
//! });
//!
//! let records = store::sample_records();
//! let first = summary.call(&records[0]).unwrap();
//! let cached = summary.call(&records[0]).unwrap();
//! assert_eq!(first, cached);
//! assert_eq!(summary.len(), 1);
//! ```

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{trace, warn};

/// A function wrapped with a result cache.
pub struct Memoized<A: ?Sized, R, E, F> {
    name: String,
    function: F,
    cache: Mutex<HashMap<String, R>>,
    _signature: PhantomData<fn(&A) -> Result<R, E>>,
}

/// Wrap `function` with a cache keyed by `name` and the serialized argument.
///
/// An empty `name` is replaced by `anonymous`.
pub fn memoize<A, R, E, F>(name: impl Into<String>, function: F) -> Memoized<A, R, E, F>
where
    A: Serialize + ?Sized,
    R: Clone,
    F: Fn(&A) -> Result<R, E>,
{
    let mut name = name.into();
    if name.is_empty() {
        name = "anonymous".to_string();
    }
    Memoized {
        name,
        function,
        cache: Mutex::new(HashMap::new()),
        _signature: PhantomData,
    }
}

impl<A, R, E, F> Memoized<A, R, E, F>
where
    A: Serialize + ?Sized,
    R: Clone,
    F: Fn(&A) -> Result<R, E>,
{
    fn cache(&self) -> MutexGuard<'_, HashMap<String, R>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn key(&self, args: &A) -> Option<String> {
        match serde_json::to_string(args) {
            Ok(json) => Some(format!("{}:{json}", self.name)),
            Err(err) => {
                warn!(name = %self.name, %err, "argument not serializable, skipping cache");
                None
            },
        }
    }

    /// Call the function, or return the cached result for `args`.
    ///
    /// The cache lock is not held while the function runs.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped function returns; errors are not cached.
    pub fn call(&self, args: &A) -> Result<R, E> {
        let Some(key) = self.key(args) else {
            return (self.function)(args);
        };

        if let Some(hit) = self.cache().get(&key) {
            trace!(%key, "memoized result reused");
            return Ok(hit.clone());
        }

        let result = (self.function)(args)?;
        self.cache().insert(key, result.clone());
        Ok(result)
    }

    /// Name used as the key prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cached results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache().len()
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache().is_empty()
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        self.cache().clear();
    }
}

impl<A: ?Sized, R, E, F> fmt::Debug for Memoized<A, R, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .cache
            .lock()
            .map_or_else(|poisoned| poisoned.into_inner().len(), |cache| cache.len());
        f.debug_struct("Memoized")
            .field("name", &self.name)
            .field("entries", &entries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use std::cell::Cell;

    #[test]
    fn test_result_is_computed_once_per_argument() {
        let calls = Cell::new(0);
        let double = memoize("double", |n: &i32| {
            calls.set(calls.get() + 1);
            Ok::<_, CatalogError>(n * 2)
        });
        assert_eq!(double.call(&21).unwrap(), 42);
        assert_eq!(double.call(&21).unwrap(), 42);
        assert_eq!(double.call(&5).unwrap(), 10);
        assert_eq!(calls.get(), 2);
        assert_eq!(double.len(), 2);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let calls = Cell::new(0);
        let flaky = memoize("flaky", |n: &u8| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                Err(CatalogError::InvalidArgument(format!("rejected {n}")))
            } else {
                Ok(*n)
            }
        });
        assert!(flaky.call(&1).is_err());
        assert!(flaky.is_empty());
        assert_eq!(flaky.call(&1).unwrap(), 1);
        assert_eq!(flaky.call(&1).unwrap(), 1);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_unsized_arguments_and_default_name() {
        let length = memoize("", |s: &str| Ok::<_, CatalogError>(s.len()));
        assert_eq!(length.name(), "anonymous");
        assert_eq!(length.call("catalog").unwrap(), 7);
        assert_eq!(length.len(), 1);
        length.clear();
        assert!(length.is_empty());
    }
}
