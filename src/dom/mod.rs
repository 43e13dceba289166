//! Browser bindings
//!
//! web-sys implementations of the collaborator traits used by the gallery
//! controller, plus small lookup helpers.

pub mod form;
pub mod gallery;
pub mod lightbox;
pub mod load_more;
pub mod notify;
pub mod sentinel;

pub use form::read_search_query;
pub use gallery::DomGallery;
pub use lightbox::Lightbox;
pub use load_more::ManualTrigger;
pub use notify::ToastNotifier;
pub use sentinel::AutoScrollTrigger;

use web_sys::{Document, Element, HtmlElement, Window};
use wasm_bindgen::JsCast;
use crate::errors::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or_else(|| DomError::MissingElement("window".to_string()))
}

pub fn document() -> Result<Document, DomError> {
    window()?
        .document()
        .ok_or_else(|| DomError::MissingElement("document".to_string()))
}

/// First element matching `selector`, or `MissingElement`
pub fn query_selector(selector: &str) -> Result<Element, DomError> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| DomError::MissingElement(selector.to_string()))
}

/// Set `display` on an element; non-HTML elements are left alone
pub fn set_display(element: &Element, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if let Err(err) = html.style().set_property("display", value) {
            crate::wasm_warn!("could not set display={} : {:?}", value, err);
        }
    }
}
