//! Gallery container backed by a DOM element

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollToOptions};
use crate::dom::{document, window, Lightbox};
use crate::renderers::{CardContext, GalleryView};
use crate::{wasm_error, wasm_log, wasm_warn};

type CardClick = Closure<dyn FnMut(MouseEvent)>;

pub struct DomGallery {
    container: Element,
    lightbox: Rc<Lightbox>,
    /// Click handlers of the cards currently in the container
    listeners: Vec<(Element, CardClick)>,
    scroll_delay_ms: u32,
    scroll_cards: f64,
}

impl DomGallery {
    pub fn new(container: Element, lightbox: Rc<Lightbox>) -> Self {
        Self {
            container,
            lightbox,
            listeners: Vec::new(),
            scroll_delay_ms: 500,
            scroll_cards: 2.0,
        }
    }

    /// Configure the scroll that follows an appended batch
    pub fn with_scroll(mut self, delay_ms: u32, cards: f64) -> Self {
        self.scroll_delay_ms = delay_ms;
        self.scroll_cards = cards;
        self
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn bind_card(&mut self, card: &CardContext) -> Result<(), JsValue> {
        let Some(element) = document()
            .ok()
            .and_then(|doc| doc.get_element_by_id(&card.id))
        else {
            wasm_warn!("bind_overlay: card #{} not in document", card.id);
            return Ok(());
        };

        let lightbox = Rc::clone(&self.lightbox);
        let href = card.href.clone();
        let caption = card.alt.clone();
        let on_click = CardClick::new(move |event: MouseEvent| {
            event.prevent_default();
            lightbox.open(&href, &caption);
        });
        element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        self.listeners.push((element, on_click));
        Ok(())
    }
}

impl GalleryView for DomGallery {
    fn replace(&mut self, markup: &str) {
        // Old cards go away with their handlers
        self.listeners.clear();
        self.container.set_inner_html(markup);
    }

    fn append(&mut self, markup: &str) {
        if let Err(err) = self.container.insert_adjacent_html("beforeend", markup) {
            wasm_error!("append: insertAdjacentHTML failed: {:?}", err);
        }
    }

    fn bind_overlay(&mut self, cards: &[CardContext]) {
        for card in cards {
            if let Err(err) = self.bind_card(card) {
                wasm_error!("bind_overlay: #{} failed: {:?}", card.id, err);
            }
        }
        wasm_log!("bind_overlay: {} cards bound, {} handlers live", cards.len(), self.listeners.len());
    }

    fn reveal_appended(&mut self) {
        if self.scroll_cards <= 0.0 {
            return;
        }
        let Some(first_card) = self.container.first_element_child() else {
            return;
        };
        let distance = first_card.get_bounding_client_rect().height() * self.scroll_cards;

        let Ok(window) = window() else {
            return;
        };
        let scroll_target = window.clone();
        let scroll = Closure::once_into_js(move || {
            let options = ScrollToOptions::new();
            options.set_top(distance);
            options.set_behavior(ScrollBehavior::Smooth);
            scroll_target.scroll_by_with_scroll_to_options(&options);
        });

        if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            scroll.unchecked_ref(),
            self.scroll_delay_ms as i32,
        ) {
            wasm_error!("reveal_appended: setTimeout failed: {:?}", err);
        }
    }
}

impl Drop for DomGallery {
    fn drop(&mut self) {
        for (card, on_click) in self.listeners.drain(..) {
            if let Err(err) =
                card.remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            {
                wasm_warn!("DomGallery: card listener not removed: {:?}", err);
            }
        }
    }
}
