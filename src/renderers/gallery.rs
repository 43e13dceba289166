//! Gallery renderer
//!
//! Writes card markup into a [`GalleryView`] and keeps track of which cards
//! already have the lightbox overlay bound, so that appending a page never
//! binds a card twice and replacing the gallery starts from a clean slate.

use std::collections::HashSet;
use crate::errors::RenderError;
use crate::models::ResultRecord;
use crate::renderers::markup::{card_contexts, render_cards, CardContext};

/// How new cards relate to the existing ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Clear the container first (new search)
    Replace,
    /// Add after the existing cards (next page)
    Append,
}

/// Rendering target: the gallery container and its overlay
pub trait GalleryView {
    /// Replace the container contents (`innerHTML`)
    fn replace(&mut self, markup: &str);

    /// Insert after the existing contents (`beforeend`)
    fn append(&mut self, markup: &str);

    /// Bind the click-to-enlarge overlay to the given cards
    fn bind_overlay(&mut self, cards: &[CardContext]);

    /// Bring a freshly appended batch into view
    fn reveal_appended(&mut self);
}

pub struct GalleryRenderer<V: GalleryView> {
    view: V,
    bound: HashSet<String>,
    next_index: usize,
}

impl<V: GalleryView> GalleryRenderer<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            bound: HashSet::new(),
            next_index: 0,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Number of cards currently in the gallery
    pub fn card_count(&self) -> usize {
        self.next_index
    }

    pub fn is_bound(&self, card_id: &str) -> bool {
        self.bound.contains(card_id)
    }

    /// Render `records` and bind the overlay to the new cards.
    /// Returns how many cards were bound by this call.
    pub fn render(&mut self, records: &[ResultRecord], mode: RenderMode) -> Result<usize, RenderError> {
        let first_index = match mode {
            RenderMode::Replace => 0,
            RenderMode::Append => self.next_index,
        };
        let cards = card_contexts(records, first_index);
        let markup = render_cards(&cards)?;

        match mode {
            RenderMode::Replace => {
                self.bound.clear();
                self.view.replace(&markup);
            }
            RenderMode::Append => self.view.append(&markup),
        }
        self.next_index = first_index + cards.len();

        let unbound: Vec<CardContext> = cards
            .into_iter()
            .filter(|card| !self.bound.contains(&card.id))
            .collect();
        if !unbound.is_empty() {
            self.view.bind_overlay(&unbound);
            self.bound.extend(unbound.iter().map(|card| card.id.clone()));
        }
        Ok(unbound.len())
    }

    /// Empty the gallery (new search without results)
    pub fn clear(&mut self) {
        self.bound.clear();
        self.next_index = 0;
        self.view.replace("");
    }

    pub fn reveal_appended(&mut self) {
        self.view.reveal_appended();
    }
}
