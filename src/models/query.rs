//! Search query value

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty, trimmed search text
///
/// The only way to build one is [`SearchQuery::parse`], so holding a
/// `SearchQuery` means the text is worth sending to the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Parse raw form input; `None` for empty or whitespace-only input
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(SearchQuery(trimmed.to_string()))
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

impl TryFrom<String> for SearchQuery {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SearchQuery::parse(&value).ok_or_else(|| "search query must not be empty".to_string())
    }
}

impl From<SearchQuery> for String {
    fn from(query: SearchQuery) -> Self {
        query.0
    }
}
