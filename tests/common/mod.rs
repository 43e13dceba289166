// Recording fakes for the gallery collaborator traits
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use pixabay_gallery_wasm::controller::{LoadTrigger, Notifier};
use pixabay_gallery_wasm::renderers::{CardContext, GalleryView};
use pixabay_gallery_wasm::{FetchError, ImageSource, ResultPage, ResultRecord, SearchQuery};

#[derive(Debug, Default)]
pub struct RecordingView {
    pub html: String,
    pub bound: Vec<String>,
    pub replaces: usize,
    pub appends: usize,
    pub reveals: usize,
}

impl RecordingView {
    pub fn card_count(&self) -> usize {
        self.html.matches("class=\"photo-card\"").count()
    }

    /// Alt texts of the rendered cards, in document order
    pub fn card_alts(&self) -> Vec<String> {
        self.html
            .split("alt=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_string)
            .collect()
    }
}

impl GalleryView for RecordingView {
    fn replace(&mut self, markup: &str) {
        self.replaces += 1;
        self.html = markup.to_string();
    }

    fn append(&mut self, markup: &str) {
        self.appends += 1;
        self.html.push_str(markup);
    }

    fn bind_overlay(&mut self, cards: &[CardContext]) {
        self.bound.extend(cards.iter().map(|card| card.id.clone()));
    }

    fn reveal_appended(&mut self) {
        self.reveals += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub failures: Vec<String>,
    pub infos: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn failure(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingTrigger {
    pub active: bool,
    pub activations: usize,
    pub deactivations: usize,
    pub resets: usize,
    pub retries: usize,
}

impl LoadTrigger for RecordingTrigger {
    fn activate(&mut self) {
        self.active = true;
        self.activations += 1;
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.deactivations += 1;
    }

    fn reset(&mut self) {
        self.active = false;
        self.resets += 1;
    }

    fn retry(&mut self) {
        self.active = true;
        self.retries += 1;
    }
}

pub fn records(prefix: &str, count: usize) -> Vec<ResultRecord> {
    (0..count)
        .map(|i| ResultRecord {
            id: i as u64,
            webformat_url: format!("https://cdn.example/{}/{}_640.jpg", prefix, i),
            large_image_url: Some(format!("https://cdn.example/{}/{}_1280.jpg", prefix, i)),
            tags: format!("{}-{}", prefix, i),
            likes: i as u64,
            views: 100 + i as u64,
            comments: 1,
            downloads: 10,
        })
        .collect()
}

pub fn page(prefix: &str, count: usize, total_hits: Option<u64>) -> ResultPage {
    ResultPage::new(records(prefix, count), total_hits)
}

/// Serves canned pages keyed by (query, page); unknown pages are empty.
/// Every fetch yields once so concurrent callers interleave.
#[derive(Default)]
pub struct ScriptedSource {
    pages: HashMap<(String, u32), Result<ResultPage, FetchError>>,
    pub calls: RefCell<Vec<(String, u32)>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, query: &str, number: u32, result: Result<ResultPage, FetchError>) -> Self {
        self.pages.insert((query.to_string(), number), result);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ImageSource for ScriptedSource {
    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<ResultPage, FetchError> {
        self.calls.borrow_mut().push((query.as_str().to_string(), page));
        tokio::task::yield_now().await;
        self.pages
            .get(&(query.as_str().to_string(), page))
            .cloned()
            .unwrap_or_else(|| Ok(ResultPage::empty()))
    }
}
