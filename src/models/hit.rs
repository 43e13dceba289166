//! Search result records as returned by the Pixabay API

use serde::{Deserialize, Serialize};

/// One image hit with its engagement counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(default)]
    pub id: u64,

    /// Medium-sized preview, used as the card thumbnail
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,

    /// Full-size image opened by the overlay
    #[serde(rename = "largeImageURL", default, skip_serializing_if = "Option::is_none")]
    pub large_image_url: Option<String>,

    /// Comma separated tag list, used as alt text
    #[serde(default)]
    pub tags: String,

    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub downloads: u64,
}

impl ResultRecord {
    /// Link target of the card: the large image when the API provided one
    pub fn full_size_url(&self) -> &str {
        self.large_image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.webformat_url)
    }
}

/// Body of a successful search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,

    /// Number of hits reachable through paging
    #[serde(rename = "totalHits", default)]
    pub total_hits: u64,

    #[serde(default)]
    pub hits: Vec<ResultRecord>,
}

/// One page of results, in API order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPage {
    pub records: Vec<ResultRecord>,
    /// `None` when the source does not know how many hits exist
    pub total_hits: Option<u64>,
}

impl ResultPage {
    pub fn new(records: Vec<ResultRecord>, total_hits: Option<u64>) -> Self {
        Self { records, total_hits }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<SearchResponse> for ResultPage {
    fn from(response: SearchResponse) -> Self {
        ResultPage::new(response.hits, Some(response.total_hits))
    }
}
