//! `GalleryApp`: the object JavaScript creates to run the gallery
//!
//! ```js
//! import init, { GalleryApp } from './pkg/pixabay_gallery_wasm.js';
//! await init();
//! const app = new GalleryApp({ apiKey: '...', trigger: 'auto' });
//! ```
//!
//! Keep the returned object alive for as long as the page uses the gallery.
//! `app.free()` detaches every listener the gallery added to the page.

use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlFormElement};
use crate::api::helpers::{deserialize, serialize, to_js_error};
use crate::config::{GalleryConfig, TriggerKind};
use crate::controller::{GalleryController, LoadTrigger, SearchSession};
use crate::dom::{
    document, query_selector, read_search_query, set_display, AutoScrollTrigger, DomGallery,
    Lightbox, ManualTrigger, ToastNotifier,
};
use crate::errors::DomError;
use crate::search::PixabayClient;
use crate::{wasm_info, wasm_log, wasm_warn};

type AppSession = SearchSession<PixabayClient, DomGallery, ToastNotifier, Box<dyn LoadTrigger>>;

#[wasm_bindgen]
pub struct GalleryApp {
    session: Rc<AppSession>,
    trigger_kind: TriggerKind,
    form: HtmlFormElement,
    on_submit: Closure<dyn FnMut(Event)>,
}

/// Callback handed to triggers; holds the session weakly so the trigger
/// (owned by the session) does not keep it alive
fn next_page_callback(session: Weak<AppSession>) -> Rc<dyn Fn()> {
    Rc::new(move || {
        if let Some(session) = session.upgrade() {
            spawn_local(async move {
                session.load_more().await;
            });
        }
    })
}

#[wasm_bindgen]
impl GalleryApp {
    /// Wire the gallery into the page described by `config`
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GalleryApp, JsValue> {
        let config: GalleryConfig = deserialize(config, "Invalid gallery config")?;
        config.validate().map_err(to_js_error)?;
        Self::mount(config).map_err(to_js_error)
    }

    /// Run a search as if the form had been submitted with `query`
    pub fn search(&self, query: String) {
        wasm_log!("search() called from JS");
        let session = Rc::clone(&self.session);
        spawn_local(async move {
            session.submit(&query).await;
        });
    }

    /// Request the next page (ignored while loading or when exhausted)
    #[wasm_bindgen(js_name = loadMore)]
    pub fn load_more(&self) {
        let session = Rc::clone(&self.session);
        spawn_local(async move {
            session.load_more().await;
        });
    }

    /// Snapshot of the pagination state: `{current_page, loaded, total_hits, phase}`
    pub fn pagination(&self) -> Result<JsValue, JsValue> {
        let controller = self.session.controller();
        serialize(controller.pagination(), "Failed to serialize pagination state")
    }

    /// Query of the current results, if any
    pub fn query(&self) -> Option<String> {
        self.session
            .controller()
            .query()
            .map(|query| query.as_str().to_string())
    }

    #[wasm_bindgen(js_name = triggerKind)]
    pub fn trigger_kind(&self) -> String {
        self.trigger_kind.as_str().to_string()
    }
}

impl GalleryApp {
    fn mount(config: GalleryConfig) -> Result<GalleryApp, DomError> {
        let document = document()?;
        let form: HtmlFormElement = query_selector(&config.form_selector)?
            .dyn_into()
            .map_err(|_| DomError::MissingElement(format!("{} (not a form)", config.form_selector)))?;
        let gallery_element = query_selector(&config.gallery_selector)?;
        let load_more_button = match config.trigger {
            TriggerKind::Manual => Some(query_selector(&config.load_more_selector)?),
            TriggerKind::Auto => {
                // The stock markup ships the button; it has no role here
                if let Ok(button) = query_selector(&config.load_more_selector) {
                    set_display(&button, "none");
                }
                None
            }
        };

        let lightbox = Rc::new(Lightbox::new(&document)?);
        let notifier = ToastNotifier::new(&document, config.notify_timeout_ms)?;
        let view = DomGallery::new(gallery_element.clone(), lightbox)
            .with_scroll(config.scroll_delay_ms, config.scroll_cards);
        let client = PixabayClient::from_config(&config);

        let session: Rc<AppSession> = Rc::new_cyclic(|weak| {
            let load_next = next_page_callback(weak.clone());
            let trigger: Box<dyn LoadTrigger> = match load_more_button {
                Some(button) => Box::new(ManualTrigger::new(button, load_next)),
                None => Box::new(
                    AutoScrollTrigger::new(gallery_element, config.sentinel_threshold, load_next)
                        .with_retry_delay(config.retry_delay_ms),
                ),
            };
            SearchSession::new(client, GalleryController::new(view, notifier, trigger))
        });

        let submit_session = Rc::clone(&session);
        let submit_form = form.clone();
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let raw_query = match read_search_query(&submit_form) {
                Ok(value) => value,
                Err(err) => {
                    crate::wasm_error!("submit: could not read form: {}", err);
                    return;
                }
            };
            let session = Rc::clone(&submit_session);
            spawn_local(async move {
                session.submit(&raw_query).await;
            });
        });
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;

        wasm_info!(
            "GalleryApp mounted: trigger={:?}, per_page={}, gallery='{}'",
            config.trigger,
            config.per_page,
            config.gallery_selector
        );

        Ok(GalleryApp {
            session,
            trigger_kind: config.trigger,
            form,
            on_submit,
        })
    }
}

impl Drop for GalleryApp {
    fn drop(&mut self) {
        if let Err(err) = self
            .form
            .remove_event_listener_with_callback("submit", self.on_submit.as_ref().unchecked_ref())
        {
            wasm_warn!("GalleryApp: submit listener not removed: {:?}", err);
        }
        wasm_log!("GalleryApp dropped");
    }
}
