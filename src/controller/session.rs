//! Async driver around [`GalleryController`]
//!
//! The controller sits in a `RefCell`; it is borrowed to hand out a request,
//! released while the fetch is pending, and borrowed again to apply the
//! result. A trigger that fires in between sees `Loading` and is ignored.

use std::cell::{Ref, RefCell};
use crate::controller::feedback::Notifier;
use crate::controller::gallery_controller::{GalleryController, LoadOutcome, PageRequest};
use crate::controller::trigger::LoadTrigger;
use crate::renderers::GalleryView;
use crate::search::ImageSource;

pub struct SearchSession<S, V, N, T>
where
    S: ImageSource,
    V: GalleryView,
    N: Notifier,
    T: LoadTrigger,
{
    source: S,
    controller: RefCell<GalleryController<V, N, T>>,
}

impl<S, V, N, T> SearchSession<S, V, N, T>
where
    S: ImageSource,
    V: GalleryView,
    N: Notifier,
    T: LoadTrigger,
{
    pub fn new(source: S, controller: GalleryController<V, N, T>) -> Self {
        Self {
            source,
            controller: RefCell::new(controller),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn controller(&self) -> Ref<'_, GalleryController<V, N, T>> {
        self.controller.borrow()
    }

    /// Form submission: reset and load page 1.
    /// `None` when the query was blank.
    pub async fn submit(&self, raw_query: &str) -> Option<LoadOutcome> {
        let request = self.controller.borrow_mut().submit(raw_query)?;
        Some(self.run(request).await)
    }

    /// Trigger fired: load the next page.
    /// `None` when the request was gated (loading, exhausted, no search).
    pub async fn load_more(&self) -> Option<LoadOutcome> {
        let request = self.controller.borrow_mut().request_next()?;
        Some(self.run(request).await)
    }

    async fn run(&self, request: PageRequest) -> LoadOutcome {
        let result = self.source.fetch_page(&request.query, request.page).await;
        self.controller.borrow_mut().complete(request, result)
    }
}
