//! Gallery configuration
//!
//! Passed from JavaScript as a plain object with camelCase keys. Everything
//! except `apiKey` has a default matching the stock page layout.

use serde::{Deserialize, Serialize};
use crate::errors::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://pixabay.com/api/";
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Which control asks for the next page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TriggerKind {
    /// "Load more" button
    #[default]
    Manual,
    /// Infinite scroll via a visibility sentinel
    Auto,
}

impl TriggerKind {
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "manual" | "button" => Ok(TriggerKind::Manual),
            "auto" | "scroll" | "infinite" => Ok(TriggerKind::Auto),
            other => Err(ConfigError::UnknownTrigger(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TriggerKind::Manual => "manual",
            TriggerKind::Auto => "auto",
        }
    }
}

impl TryFrom<String> for TriggerKind {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TriggerKind::from_name(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryConfig {
    pub api_key: String,
    pub endpoint: String,
    pub per_page: u32,
    pub trigger: TriggerKind,

    pub form_selector: String,
    pub gallery_selector: String,
    pub load_more_selector: String,

    /// Delay before scrolling to a freshly appended batch
    pub scroll_delay_ms: u32,
    /// Scroll distance after an append, in card heights (0 disables)
    pub scroll_cards: f64,
    pub notify_timeout_ms: u32,
    pub sentinel_threshold: f64,
    /// Base wait before infinite scroll retries a failed page; doubles per failure
    pub retry_delay_ms: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            trigger: TriggerKind::Manual,
            form_selector: "#search-form".to_string(),
            gallery_selector: ".gallery".to_string(),
            load_more_selector: ".load-more".to_string(),
            scroll_delay_ms: 500,
            scroll_cards: 2.0,
            notify_timeout_ms: 3000,
            sentinel_threshold: 0.5,
            retry_delay_ms: 2000,
        }
    }
}

impl GalleryConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if !(3..=200).contains(&self.per_page) {
            return Err(ConfigError::InvalidPerPage(self.per_page));
        }
        if !(0.0..=1.0).contains(&self.sentinel_threshold) {
            return Err(ConfigError::InvalidThreshold(self.sentinel_threshold));
        }
        Ok(())
    }

    /// Parse and validate a JSON config (used by tests and non-JS hosts)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GalleryConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
