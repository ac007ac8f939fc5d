//! Configuration options for a [`CatalogManager`](crate::catalog::CatalogManager).
//!
//! # Examples
//!
//! ```
//! use shelfcat::CatalogConfig;
//!
//! // Default configuration (search caching on, "Unknown" bucket)
//! let config = CatalogConfig::default();
//! assert!(config.cache_searches);
//!
//! // Missing keys take their defaults
//! let config = CatalogConfig::from_json_str(r#"{"cache_searches": false}"#).unwrap();
//! assert_eq!(config.unknown_category_label, "Unknown");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Label used for records that have no category.
pub const DEFAULT_UNKNOWN_CATEGORY: &str = "Unknown";

/// Configuration for a catalog manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Keep search results keyed by normalized query.
    ///
    /// When false, every search recomputes its result.
    pub cache_searches: bool,

    /// Bucket name used in per-category statistics for records without a category.
    pub unknown_category_label: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            cache_searches: true,
            unknown_category_label: DEFAULT_UNKNOWN_CATEGORY.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or a key has the wrong type.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = CatalogConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(CatalogConfig::from_json_str(r#"{"cache_searches": "yes"}"#).is_err());
    }
}
