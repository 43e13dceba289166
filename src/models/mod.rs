//! Models module for the image gallery
//!
//! Plain data: the search query, result records and pagination state.

pub mod hit;
pub mod pagination;
pub mod query;

// Re-export commonly used types
pub use hit::{ResultPage, ResultRecord, SearchResponse};
pub use pagination::{LoadPhase, PaginationState};
pub use query::SearchQuery;
