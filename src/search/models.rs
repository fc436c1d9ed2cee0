//! Search request models

use crate::error::{SearchError, SearchResult};
use std::fmt;

/// A validated, trimmed, non-empty search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate a caller-supplied query
    pub fn parse(raw: Option<&str>) -> SearchResult<Self> {
        match raw.map(str::trim) {
            Some(q) if !q.is_empty() => Ok(Self(q.to_string())),
            _ => Err(SearchError::BadRequest),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-supplied engine key, lowercased. Absent means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineSelector(Option<String>);

impl EngineSelector {
    pub fn new(raw: Option<&str>) -> Self {
        Self(
            raw.map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        )
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
