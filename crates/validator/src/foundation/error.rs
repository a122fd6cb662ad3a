//! Error types.
//!
//! Two very different things live here:
//!
//! - [`ErrorMap`]: the *outcome* of a validation run, one message per
//!   invalid field. Invalid input is never an `Err` on its own; it only
//!   becomes one when a caller asks for [`Report::into_result`](crate::Report::into_result).
//! - [`Error`]: construction and configuration failures, such as a malformed
//!   caller-supplied pattern or a message catalog with a broken template.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// Construction-time and configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pattern handed to `try_matches` / `try_matches_list` does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A message catalog document could not be parsed.
    #[error("invalid message catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// A message template lost the placeholder its renderer substitutes.
    #[error("message `{key}` must contain the `{placeholder}` placeholder")]
    MissingPlaceholder {
        key: &'static str,
        placeholder: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}

/// Result alias for fallible construction.
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// ERROR MAP
// ============================================================================

/// Field name to the message of the first rule that field failed.
///
/// Holds at most one entry per field. Entries keep the order in which fields
/// were validated, which only matters for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: IndexMap<String, String>,
}

impl ErrorMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the message for a field, replacing any previous one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(field.into(), message.into());
    }

    /// Message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(field, message)` pairs in validation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, String> {
        self.entries
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed for {} field(s):", self.entries.len())?;
        for (field, message) in &self.entries {
            writeln!(f, "  {field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorMap {}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ErrorMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
