//! Image Gallery WASM API
//!
//! JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: logging macros, JS (de)serialization and error conversion
//! - `app`: the `GalleryApp` object that mounts the gallery on a page

pub mod helpers;
pub mod app;

pub use app::GalleryApp;
