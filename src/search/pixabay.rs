//! Pixabay search API client

use gloo_net::http::Request;
use serde::Serialize;
use crate::config::GalleryConfig;
use crate::errors::FetchError;
use crate::models::{ResultPage, SearchQuery, SearchResponse};
use crate::search::ImageSource;
use crate::{wasm_error, wasm_info, wasm_log};

/// Query string parameters of a search request
#[derive(Debug, Clone, Serialize)]
pub struct SearchParams<'a> {
    pub key: &'a str,
    pub q: &'a str,
    pub image_type: &'static str,
    pub orientation: &'static str,
    pub safesearch: bool,
    pub page: u32,
    pub per_page: u32,
}

impl<'a> SearchParams<'a> {
    pub fn new(key: &'a str, query: &'a SearchQuery, page: u32, per_page: u32) -> Self {
        Self {
            key,
            q: query.as_str(),
            image_type: "photo",
            orientation: "horizontal",
            safesearch: true,
            page,
            per_page,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PixabayClient {
    endpoint: String,
    api_key: String,
    per_page: u32,
}

impl PixabayClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, per_page: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            per_page,
        }
    }

    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(config.endpoint.clone(), config.api_key.clone(), config.per_page)
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Full request URL for `page` of `query`
    pub fn request_url(&self, query: &SearchQuery, page: u32) -> Result<String, FetchError> {
        let params = SearchParams::new(&self.api_key, query, page, self.per_page);
        let encoded = serde_urlencoded::to_string(&params)
            .map_err(|e| FetchError::Encode(e.to_string()))?;
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        Ok(format!("{}{}{}", self.endpoint, separator, encoded))
    }

    async fn request(&self, query: &SearchQuery, page: u32) -> Result<ResultPage, FetchError> {
        let url = self.request_url(query, page)?;

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(body.into())
    }
}

impl ImageSource for PixabayClient {
    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<ResultPage, FetchError> {
        wasm_log!("fetch_page: q='{}', page={}, per_page={}", query, page, self.per_page);

        match self.request(query, page).await {
            Ok(result) => {
                wasm_info!(
                    "fetch_page: {} hits on page {} (totalHits={:?})",
                    result.len(),
                    page,
                    result.total_hits
                );
                Ok(result)
            }
            Err(err) => {
                wasm_error!("Error fetching page {} for '{}': {}", page, query, err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_has_fixed_parameters() {
        let client = PixabayClient::new("https://pixabay.com/api/", "KEY", 20);
        let query = SearchQuery::parse("yellow flowers").unwrap();
        let url = client.request_url(&query, 3).unwrap();

        assert_eq!(
            url,
            "https://pixabay.com/api/?key=KEY&q=yellow+flowers&image_type=photo\
             &orientation=horizontal&safesearch=true&page=3&per_page=20"
        );
    }

    #[test]
    fn test_request_url_escapes_query() {
        let client = PixabayClient::new("https://pixabay.com/api/", "KEY", 20);
        let query = SearchQuery::parse("cats&dogs=1").unwrap();
        let url = client.request_url(&query, 1).unwrap();

        assert!(url.contains("q=cats%26dogs%3D1"));
    }

    #[test]
    fn test_request_url_respects_existing_query_string() {
        let client = PixabayClient::new("https://proxy.local/api?lang=en", "KEY", 40);
        let query = SearchQuery::parse("sea").unwrap();
        let url = client.request_url(&query, 1).unwrap();

        assert!(url.starts_with("https://proxy.local/api?lang=en&key=KEY"));
        assert!(url.ends_with("per_page=40"));
    }
}
