//! Error types for the gallery
//!
//! Fetch failures are kept apart from empty result pages so the UI can tell
//! "nothing more to show" from "something broke".

use thiserror::Error;

/// Failure of a single search request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never produced a response (offline, CORS, DNS, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status
    #[error("Search API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The query string could not be built
    #[error("Could not encode search request: {0}")]
    Encode(String),

    /// The response body was not the expected JSON
    #[error("Could not decode search response: {0}")]
    Decode(String),
}

/// Invalid gallery configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Missing Pixabay API key (apiKey)")]
    MissingApiKey,

    #[error("perPage must be between 3 and 200, got {0}")]
    InvalidPerPage(u32),

    #[error("Unknown trigger '{0}' (expected \"manual\" or \"auto\")")]
    UnknownTrigger(String),

    #[error("sentinelThreshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),

    #[error("Invalid configuration object: {0}")]
    Deserialize(String),
}

/// Failure while wiring the gallery into the document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomError {
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("DOM operation failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

/// Markup generation failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(String),
}

impl From<mustache::Error> for RenderError {
    fn from(err: mustache::Error) -> Self {
        RenderError::Template(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages_name_the_stage() {
        let encode = FetchError::Encode("unsupported value".to_string()).to_string();
        assert_eq!(encode, "Could not encode search request: unsupported value");
        assert!(!encode.starts_with("Request failed"));

        let status = FetchError::Status { status: 400, body: "[ERROR 400]".to_string() };
        assert_eq!(status.to_string(), "Search API returned HTTP 400: [ERROR 400]");
    }
}
