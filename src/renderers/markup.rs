//! Card markup generation
//!
//! Pure: records in, HTML string out. Cards keep the order the API returned
//! them in, and every interpolated value goes through Mustache's HTML escaping.

use serde::Serialize;
use crate::errors::RenderError;
use crate::models::ResultRecord;

const CARD_TEMPLATE: &str = include_str!("templates/photo_card.html.mustache");

/// Element id of the card at `index` within the current search
pub fn card_id(index: usize) -> String {
    format!("photo-card-{}", index)
}

/// Template data for one card
#[derive(Debug, Clone, Serialize)]
pub struct CardContext {
    pub id: String,
    pub index: usize,
    pub href: String,
    pub src: String,
    pub alt: String,
    pub likes: u64,
    pub views: u64,
    pub comments: u64,
    pub downloads: u64,
}

impl CardContext {
    pub fn new(record: &ResultRecord, index: usize) -> Self {
        Self {
            id: card_id(index),
            index,
            href: record.full_size_url().to_string(),
            src: record.webformat_url.clone(),
            alt: record.tags.clone(),
            likes: record.likes,
            views: record.views,
            comments: record.comments,
            downloads: record.downloads,
        }
    }
}

#[derive(Serialize)]
struct GalleryContext<'a> {
    cards: &'a [CardContext],
}

/// Build card contexts numbered from `first_index`
pub fn card_contexts(records: &[ResultRecord], first_index: usize) -> Vec<CardContext> {
    records
        .iter()
        .enumerate()
        .map(|(offset, record)| CardContext::new(record, first_index + offset))
        .collect()
}

/// Render the given cards to one HTML fragment
pub fn render_cards(cards: &[CardContext]) -> Result<String, RenderError> {
    if cards.is_empty() {
        return Ok(String::new());
    }
    let template = mustache::compile_str(CARD_TEMPLATE)?;
    Ok(template.render_to_string(&GalleryContext { cards })?)
}

/// Convenience wrapper: records straight to markup
pub fn create_gallery_markup(records: &[ResultRecord], first_index: usize) -> Result<String, RenderError> {
    render_cards(&card_contexts(records, first_index))
}
