//! Image search client
//!
//! [`ImageSource`] is the seam between the gallery loop and the network.
//! [`PixabayClient`] is the real implementation; tests plug in fakes.

pub mod pixabay;

pub use pixabay::{PixabayClient, SearchParams};

use crate::errors::FetchError;
use crate::models::{ResultPage, SearchQuery};

/// Something that can produce one page of image results
///
/// Futures are driven on the single UI thread, so no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait ImageSource {
    /// Fetch `page` (1-based) of results for `query`
    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<ResultPage, FetchError>;
}
