//! Browser tests for the DOM bindings
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;
use std::cell::Cell;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlFormElement};

use pixabay_gallery_wasm::controller::{LoadTrigger, Notifier};
use pixabay_gallery_wasm::dom::{
    self, read_search_query, AutoScrollTrigger, DomGallery, Lightbox, ManualTrigger, ToastNotifier,
};
use pixabay_gallery_wasm::{GalleryApp, GalleryConfig, GalleryRenderer, RenderMode, ResultRecord};

wasm_bindgen_test_configure!(run_in_browser);

fn records(count: usize) -> Vec<ResultRecord> {
    (0..count)
        .map(|i| ResultRecord {
            id: i as u64,
            webformat_url: format!("https://cdn.example/{}_640.jpg", i),
            large_image_url: Some(format!("https://cdn.example/{}_1280.jpg", i)),
            tags: format!("tag-{}", i),
            likes: 1,
            views: 2,
            comments: 3,
            downloads: 4,
        })
        .collect()
}

fn mount(tag: &str) -> Element {
    let document = dom::document().unwrap();
    let element = document.create_element(tag).unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn test_gallery_replace_then_append() {
    let container = mount("div");
    let lightbox = Rc::new(Lightbox::new(&dom::document().unwrap()).unwrap());
    let mut renderer = GalleryRenderer::new(DomGallery::new(container.clone(), lightbox).with_scroll(0, 0.0));

    renderer.render(&records(3), RenderMode::Replace).unwrap();
    assert_eq!(container.child_element_count(), 3);

    renderer.render(&records(2), RenderMode::Append).unwrap();
    assert_eq!(container.child_element_count(), 5);
    assert_eq!(renderer.view().listener_count(), 5);

    renderer.render(&records(1), RenderMode::Replace).unwrap();
    assert_eq!(container.child_element_count(), 1);
    assert_eq!(renderer.view().listener_count(), 1);
    container.remove();
}

#[wasm_bindgen_test]
fn test_card_click_opens_lightbox() {
    let container = mount("div");
    let lightbox = Rc::new(Lightbox::new(&dom::document().unwrap()).unwrap());
    let mut renderer = GalleryRenderer::new(DomGallery::new(container.clone(), Rc::clone(&lightbox)));
    renderer.render(&records(1), RenderMode::Replace).unwrap();

    assert!(!lightbox.is_open());
    let card: HtmlElement = dom::document()
        .unwrap()
        .get_element_by_id("photo-card-0")
        .unwrap()
        .dyn_into()
        .unwrap();
    card.click();
    assert!(lightbox.is_open());

    lightbox.close();
    assert!(!lightbox.is_open());
    container.remove();
}

#[wasm_bindgen_test]
fn test_manual_trigger_toggles_button() {
    let button = mount("button");
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let mut trigger = ManualTrigger::new(button.clone(), Rc::new(move || counter.set(counter.get() + 1)));

    let style = || button.get_attribute("style").unwrap_or_default();
    assert!(style().contains("display: none"));

    trigger.activate();
    assert!(style().contains("display: block"));
    button.dyn_ref::<HtmlElement>().unwrap().click();
    assert_eq!(clicks.get(), 1);

    trigger.deactivate();
    assert!(style().contains("display: none"));
    button.remove();
}

#[wasm_bindgen_test]
fn test_auto_trigger_observer_lifecycle() {
    let gallery = mount("div");
    let sentinels = || dom::document().unwrap().query_selector_all(".scroll-sentinel").unwrap().length();
    let mut trigger = AutoScrollTrigger::new(gallery.clone(), 0.5, Rc::new(|| {})).with_retry_delay(60_000);
    assert!(!trigger.is_observing());
    assert_eq!(sentinels(), 0);

    trigger.activate();
    assert!(trigger.is_observing());
    let sentinel = gallery.next_element_sibling().expect("sentinel follows the gallery");
    assert_eq!(sentinel.class_name(), "scroll-sentinel");

    trigger.activate();
    assert_eq!(sentinels(), 1);
    assert_eq!(gallery.next_element_sibling(), Some(sentinel.clone()));

    trigger.retry();
    trigger.retry();
    assert!(trigger.is_observing());
    assert_eq!(trigger.consecutive_failures(), 2);

    trigger.deactivate();
    assert!(!trigger.is_observing());

    trigger.activate();
    assert!(trigger.is_observing());
    assert_eq!(trigger.consecutive_failures(), 0);

    trigger.reset();
    assert!(!trigger.is_observing());

    trigger.activate();
    assert!(trigger.is_observing());
    assert_eq!(sentinels(), 1);

    drop(trigger);
    sentinel.remove();
    gallery.remove();
}

#[wasm_bindgen_test]
fn test_lightbox_closes_on_backdrop_only() {
    let lightbox = Lightbox::new(&dom::document().unwrap()).unwrap();
    lightbox.open("https://cdn.example/1_1280.jpg", "tag-1");
    assert!(lightbox.is_open());

    let image: HtmlElement = lightbox
        .element()
        .query_selector(".lightbox__image")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(image.get_attribute("alt").as_deref(), Some("tag-1"));

    image.click();
    assert!(lightbox.is_open());

    lightbox.element().dyn_ref::<HtmlElement>().unwrap().click();
    assert!(!lightbox.is_open());
}

#[wasm_bindgen_test]
fn test_dropping_app_detaches_submit_listener() {
    let form = mount("form");
    form.set_id("detach-form");
    let gallery = mount("div");
    gallery.set_class_name("detach-gallery");
    let button = mount("button");
    button.set_class_name("detach-load-more");

    let config = js_sys::JSON::parse(
        r##"{"apiKey": "k", "formSelector": "#detach-form",
            "gallerySelector": ".detach-gallery", "loadMoreSelector": ".detach-load-more"}"##,
    )
    .unwrap();
    let app = GalleryApp::new(config).unwrap();

    // Synthetic submit events never navigate; only listeners can cancel them
    let submit = || {
        let init = EventInit::new();
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("submit", &init).unwrap();
        form.dispatch_event(&event).unwrap();
        event.default_prevented()
    };
    assert!(submit());

    drop(app);
    assert!(!submit());

    form.remove();
    gallery.remove();
    button.remove();
}

#[wasm_bindgen_test]
fn test_form_query_extraction() {
    let form = mount("form");
    form.set_inner_html(r#"<input name="searchQuery" value="mountain lake" />"#);
    let form: HtmlFormElement = form.dyn_into().unwrap();

    assert_eq!(read_search_query(&form).unwrap(), "mountain lake");
    form.remove();
}

#[wasm_bindgen_test]
fn test_toast_is_shown() {
    let mut notifier = ToastNotifier::new(&dom::document().unwrap(), 50).unwrap();
    notifier.info("hello");
    notifier.failure("oops");

    let container = notifier.container();
    assert_eq!(container.child_element_count(), 2);
    assert_eq!(container.first_element_child().unwrap().class_name(), "toast toast--info");
}

#[wasm_bindgen_test]
fn test_config_from_js_object() {
    let value = js_sys::JSON::parse(r#"{"apiKey": "k", "trigger": "auto", "perPage": 40}"#).unwrap();
    let config: GalleryConfig = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(config.per_page, 40);
    assert!(config.validate().is_ok());
}
