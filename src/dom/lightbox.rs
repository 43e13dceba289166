//! Click-to-enlarge overlay for gallery cards

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent};
use crate::dom::set_display;
use crate::errors::DomError;
use crate::wasm_log;

pub struct Lightbox {
    document: Document,
    overlay: Element,
    image: Element,
    caption: Element,
    _on_backdrop: Closure<dyn FnMut(MouseEvent)>,
    on_key: Closure<dyn FnMut(KeyboardEvent)>,
}

impl Lightbox {
    /// Build the (hidden) overlay and attach it to `<body>`
    pub fn new(document: &Document) -> Result<Self, DomError> {
        let overlay = document.create_element("div")?;
        overlay.set_class_name("lightbox");
        overlay.set_attribute("role", "dialog")?;
        overlay.set_attribute("aria-modal", "true")?;

        let image = document.create_element("img")?;
        image.set_class_name("lightbox__image");
        let caption = document.create_element("p")?;
        caption.set_class_name("lightbox__caption");

        overlay.append_child(&image)?;
        overlay.append_child(&caption)?;
        set_display(&overlay, "none");

        document
            .body()
            .ok_or_else(|| DomError::MissingElement("body".to_string()))?
            .append_child(&overlay)?;

        let backdrop_target = overlay.clone();
        let on_backdrop = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            // Clicks on the image or caption bubble up here too
            if event.target() == event.current_target() {
                set_display(&backdrop_target, "none");
            }
        });
        overlay.add_event_listener_with_callback("click", on_backdrop.as_ref().unchecked_ref())?;

        let key_target = overlay.clone();
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                set_display(&key_target, "none");
            }
        });
        document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;

        Ok(Self {
            document: document.clone(),
            overlay,
            image,
            caption,
            _on_backdrop: on_backdrop,
            on_key,
        })
    }

    pub fn open(&self, href: &str, caption: &str) {
        wasm_log!("lightbox: open {}", href);
        if let Err(err) = self.image.set_attribute("src", href) {
            crate::wasm_error!("lightbox: could not set image src: {:?}", err);
            return;
        }
        if let Err(err) = self.image.set_attribute("alt", caption) {
            crate::wasm_warn!("lightbox: could not set image alt: {:?}", err);
        }
        self.caption.set_text_content(Some(caption));
        set_display(&self.overlay, "flex");
    }

    /// The overlay element (backdrop)
    pub fn element(&self) -> &Element {
        &self.overlay
    }

    pub fn close(&self) {
        set_display(&self.overlay, "none");
    }

    pub fn is_open(&self) -> bool {
        self.overlay
            .get_attribute("style")
            .map(|style| !style.contains("display: none"))
            .unwrap_or(false)
    }
}

impl Drop for Lightbox {
    fn drop(&mut self) {
        if let Err(err) = self
            .document
            .remove_event_listener_with_callback("keydown", self.on_key.as_ref().unchecked_ref())
        {
            crate::wasm_warn!("lightbox: keydown listener not removed: {:?}", err);
        }
        self.overlay.remove();
    }
}
