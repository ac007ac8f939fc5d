//! Search criteria for catalog lookups.
//!
//! A [`SearchQuery`] holds up to three substring criteria (title, author,
//! category) and a case-sensitivity flag. Criteria that are unset or empty
//! impose no constraint.
//!
//! Before matching, a query is reduced to a [`SearchKey`]: empty criteria are
//! dropped and, for case-insensitive queries, the remaining criteria are
//! lowercased. Two queries that select the same records the same way reduce
//! to equal keys, which is what the catalog's result cache is keyed on.
//!
//! # Examples
//!
//! ```
//! use shelfcat::SearchQuery;
//!
//! let a = SearchQuery::new().title("CLEAN").author("");
//! let b = SearchQuery::new().title("clean");
//! assert_eq!(a.key(), b.key());
//!
//! let c = SearchQuery::new().title("CLEAN").case_sensitive(true);
//! assert_ne!(a.key(), c.key());
//! ```

use crate::record::CatalogRecord;

/// Builder for catalog search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Substring the title must contain
    pub title: Option<String>,
    /// Substring the author must contain
    pub author: Option<String>,
    /// Substring the category must contain
    pub category: Option<String>,
    /// Compare without folding case
    pub case_sensitive: bool,
}

impl SearchQuery {
    /// Create a query that matches every record, case-insensitively.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the title to contain `title`.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Require the author to contain `author`.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Require the category to contain `category`.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set whether matching respects case.
    #[must_use]
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Reduce the query to its normalized cache key.
    #[must_use]
    pub fn key(&self) -> SearchKey {
        let normalize = |criterion: &Option<String>| {
            criterion
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(|c| {
                    if self.case_sensitive {
                        c.to_string()
                    } else {
                        c.to_lowercase()
                    }
                })
        };
        SearchKey {
            title: normalize(&self.title),
            author: normalize(&self.author),
            category: normalize(&self.category),
            case_sensitive: self.case_sensitive,
        }
    }

    /// Check whether `record` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, record: &CatalogRecord) -> bool {
        self.key().matches(record)
    }

    /// Human-readable description of the active criteria.
    ///
    /// Returns `All Books` when no criterion is set.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            parts.push(format!("Title: \"{title}\""));
        }
        if let Some(author) = self.author.as_deref().filter(|a| !a.is_empty()) {
            parts.push(format!("Author: {author}"));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            parts.push(format!("Category: {category}"));
        }
        if parts.is_empty() {
            "All Books".to_string()
        } else {
            parts.join(" | ")
        }
    }
}

/// Normalized search criteria, used as the result cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    title: Option<String>,
    author: Option<String>,
    category: Option<String>,
    case_sensitive: bool,
}

impl SearchKey {
    /// Check whether `record` satisfies every criterion of this key.
    ///
    /// A missing record field is compared as the empty string, so it only
    /// satisfies an absent criterion.
    #[must_use]
    pub fn matches(&self, record: &CatalogRecord) -> bool {
        self.field_matches(self.title.as_deref(), record.title())
            && self.field_matches(self.author.as_deref(), record.author())
            && self.field_matches(self.category.as_deref(), record.category())
    }

    fn field_matches(&self, criterion: Option<&str>, value: Option<&str>) -> bool {
        let Some(criterion) = criterion else {
            return true;
        };
        let value = value.unwrap_or("");
        if self.case_sensitive {
            value.contains(criterion)
        } else {
            value.to_lowercase().contains(criterion)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_records;

    #[test]
    fn test_empty_query_matches_everything() {
        let records = sample_records();
        let query = SearchQuery::new();
        assert!(records.iter().all(|r| query.matches(r)));
    }

    #[test]
    fn test_criteria_are_combined() {
        let records = sample_records();
        let query = SearchQuery::new().title("clean").author("martin");
        let hits: Vec<Option<u64>> = records
            .iter()
            .filter(|r| query.matches(r))
            .map(|r| r.id)
            .collect();
        assert_eq!(hits, vec![Some(1), Some(4)]);

        let query = SearchQuery::new().title("clean").category("software");
        assert!(!records.iter().any(|r| query.matches(r)));
    }

    #[test]
    fn test_case_sensitive_matching() {
        let records = sample_records();
        let query = SearchQuery::new().title("clean").case_sensitive(true);
        assert!(!records.iter().any(|r| query.matches(r)));

        let query = SearchQuery::new().title("Clean").case_sensitive(true);
        assert_eq!(records.iter().filter(|r| query.matches(r)).count(), 2);
    }

    #[test]
    fn test_missing_field_fails_non_empty_criterion() {
        let record = CatalogRecord::builder().title("Untitled Author").build();
        assert!(!SearchQuery::new().author("a").matches(&record));
        assert!(SearchQuery::new().author("").matches(&record));
    }

    #[test]
    fn test_describe() {
        assert_eq!(SearchQuery::new().describe(), "All Books");
        assert_eq!(
            SearchQuery::new()
                .title("Design Patterns")
                .category("Software")
                .describe(),
            "Title: \"Design Patterns\" | Category: Software"
        );
    }
}
