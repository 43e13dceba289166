//! Renderers module for the image gallery
//!
//! Markup generation for result cards and the renderer that writes it into
//! the gallery container.

pub mod gallery;
pub mod markup;

pub use gallery::{GalleryRenderer, GalleryView, RenderMode};
pub use markup::{card_id, create_gallery_markup, CardContext};
