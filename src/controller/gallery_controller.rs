//! Gallery controller (pagination state machine)
//!
//! ```text
//!   Idle --trigger--> Loading --page with hits--> Idle | Exhausted (total reached)
//!                        |----empty page--------> Exhausted
//!                        '----fetch error-------> Idle (trigger re-armed, same page again)
//! ```
//!
//! Every transition is synchronous. The network call happens between
//! [`GalleryController::submit`]/[`GalleryController::request_next`], which
//! hand out a [`PageRequest`], and [`GalleryController::complete`], which
//! takes it back. See `session.rs` for the async driver.

use crate::controller::feedback::{Feedback, Notifier};
use crate::controller::trigger::LoadTrigger;
use crate::errors::FetchError;
use crate::models::{PaginationState, ResultPage, SearchQuery};
use crate::renderers::{GalleryRenderer, GalleryView, RenderMode};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

/// Ticket for one in-flight page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Search the request belongs to; bumps on every submission
    pub generation: u64,
    pub query: SearchQuery,
    pub page: u32,
}

/// What a completed request did to the gallery
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Rendered { page: u32, count: usize, exhausted: bool },
    /// First page was empty
    NoResults,
    /// A later page was empty
    Exhausted,
    /// Fetching or rendering failed; the page was not consumed
    Failed(String),
    /// Response of a superseded search, dropped
    Stale,
}

pub struct GalleryController<V: GalleryView, N: Notifier, T: LoadTrigger> {
    renderer: GalleryRenderer<V>,
    notifier: N,
    trigger: T,
    pagination: PaginationState,
    query: Option<SearchQuery>,
    generation: u64,
}

impl<V: GalleryView, N: Notifier, T: LoadTrigger> GalleryController<V, N, T> {
    pub fn new(view: V, notifier: N, mut trigger: T) -> Self {
        trigger.reset();
        Self {
            renderer: GalleryRenderer::new(view),
            notifier,
            trigger,
            pagination: PaginationState::new(),
            query: None,
            generation: 0,
        }
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Query the current results belong to
    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn renderer(&self) -> &GalleryRenderer<V> {
        &self.renderer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    /// Start a new search from raw form input.
    ///
    /// Always accepted for non-blank input, even while a previous request is
    /// in flight; that request's response will come back stale.
    pub fn submit(&mut self, raw_query: &str) -> Option<PageRequest> {
        let Some(query) = SearchQuery::parse(raw_query) else {
            wasm_warn!("submit: empty query rejected");
            Feedback::EmptyQuery.deliver(&mut self.notifier);
            return None;
        };

        self.generation += 1;
        wasm_info!("submit: q='{}' (generation {})", query, self.generation);

        self.pagination.reset();
        self.trigger.reset();
        self.query = Some(query);
        self.begin()
    }

    /// Ask for the next page of the current search.
    ///
    /// `None` before any search, while a request is in flight, or once the
    /// results are exhausted.
    pub fn request_next(&mut self) -> Option<PageRequest> {
        if self.query.is_none() {
            wasm_log!("request_next: no search yet");
            return None;
        }
        if self.pagination.is_loading() {
            wasm_log!("request_next: page {} already loading, ignored", self.pagination.current_page);
            return None;
        }
        self.begin()
    }

    fn begin(&mut self) -> Option<PageRequest> {
        let query = self.query.clone()?;
        let page = self.pagination.begin()?;
        Some(PageRequest {
            generation: self.generation,
            query,
            page,
        })
    }

    /// Apply the result of `request`
    pub fn complete(
        &mut self,
        request: PageRequest,
        result: Result<ResultPage, FetchError>,
    ) -> LoadOutcome {
        if request.generation != self.generation || !self.pagination.is_loading() {
            wasm_log!(
                "complete: dropping stale page {} of generation {} (current {})",
                request.page,
                request.generation,
                self.generation
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(page) if page.is_empty() => self.finish_empty(request.page),
            Ok(page) => self.finish_page(request.page, page),
            Err(err) => self.finish_failed(request.page, err.to_string()),
        }
    }

    fn finish_page(&mut self, page_number: u32, page: ResultPage) -> LoadOutcome {
        let mode = if page_number == 1 {
            RenderMode::Replace
        } else {
            RenderMode::Append
        };

        if let Err(err) = self.renderer.render(&page.records, mode) {
            return self.finish_failed(page_number, err.to_string());
        }

        let count = page.len();
        let exhausted = self.pagination.advance(count, page.total_hits);
        wasm_info!(
            "page {} rendered: {} cards, {} total, next page {}",
            page_number,
            count,
            self.renderer.card_count(),
            self.pagination.current_page
        );

        if exhausted {
            self.trigger.deactivate();
            Feedback::EndOfResults.deliver(&mut self.notifier);
        } else {
            self.trigger.activate();
        }

        if mode == RenderMode::Append {
            self.renderer.reveal_appended();
        }

        LoadOutcome::Rendered {
            page: page_number,
            count,
            exhausted,
        }
    }

    fn finish_empty(&mut self, page_number: u32) -> LoadOutcome {
        self.pagination.exhaust();
        self.trigger.deactivate();

        if page_number == 1 {
            wasm_info!("no results for '{}'", self.query.as_ref().map(|q| q.as_str()).unwrap_or(""));
            self.renderer.clear();
            Feedback::NoResults.deliver(&mut self.notifier);
            LoadOutcome::NoResults
        } else {
            wasm_info!("end of results after page {}", page_number - 1);
            Feedback::EndOfResults.deliver(&mut self.notifier);
            LoadOutcome::Exhausted
        }
    }

    fn finish_failed(&mut self, page_number: u32, reason: String) -> LoadOutcome {
        wasm_error!("page {} failed: {}", page_number, reason);
        self.pagination.fail();
        // A failed first page leaves nothing to scroll past; resubmitting retries it
        if page_number > 1 {
            self.trigger.retry();
        }
        Feedback::FetchFailed.deliver(&mut self.notifier);
        LoadOutcome::Failed(reason)
    }
}
