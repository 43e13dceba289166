//! Image Search Gallery WASM Module
//!
//! Searches the Pixabay image API from the browser and renders the hits as a
//! card gallery, loading further pages through a "load more" button or
//! infinite scroll.

pub mod api;
pub mod config;
pub mod controller;
pub mod dom;
pub mod errors;
pub mod models;
pub mod renderers;
pub mod search;

// Re-export commonly used types
pub use api::GalleryApp;
pub use config::{GalleryConfig, TriggerKind};
pub use controller::{Feedback, GalleryController, LoadOutcome, LoadTrigger, Notifier, SearchSession};
pub use errors::{ConfigError, DomError, FetchError, RenderError};
pub use models::{LoadPhase, PaginationState, ResultPage, ResultRecord, SearchQuery};
pub use renderers::{GalleryRenderer, GalleryView, RenderMode};
pub use search::{ImageSource, PixabayClient};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // Logger already installed by the host page
        return;
    }

    log::info!("Image search gallery WASM module initialized");
}
