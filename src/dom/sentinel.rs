//! Infinite scroll trigger
//!
//! A zero-height marker sits right after the gallery container. While
//! active, an `IntersectionObserver` fires the load callback whenever the
//! marker is at least `threshold` visible. Deactivating or resetting drops
//! the observer; the next activation builds a fresh one.
//!
//! An observer only reports visibility *changes*, so after a failed page the
//! marker is re-observed once a backoff delay has passed.

use std::cell::Cell;
use std::rc::Rc;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use crate::controller::LoadTrigger;
use crate::dom::{document, window};
use crate::errors::DomError;
use crate::{wasm_error, wasm_log, wasm_warn};

pub const DEFAULT_RETRY_DELAY_MS: u32 = 2000;

/// Wait before the `failures`-th consecutive retry: the base delay, doubled
/// per failure, capped at 16 times the base
pub fn retry_delay(base_ms: u32, failures: u32) -> u32 {
    let doublings = failures.saturating_sub(1).min(4);
    base_ms.saturating_mul(1 << doublings)
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct AutoScrollTrigger {
    gallery: Element,
    threshold: f64,
    on_visible: Rc<dyn Fn()>,
    sentinel: Option<Element>,
    observer: Option<(IntersectionObserver, ObserverCallback)>,
    retry_delay_ms: u32,
    failures: u32,
    /// Bumped whenever a scheduled retry must not run any more
    epoch: Rc<Cell<u64>>,
}

impl AutoScrollTrigger {
    pub fn new(gallery: Element, threshold: f64, on_visible: Rc<dyn Fn()>) -> Self {
        Self {
            gallery,
            threshold,
            on_visible,
            sentinel: None,
            observer: None,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            failures: 0,
            epoch: Rc::new(Cell::new(0)),
        }
    }

    pub fn with_retry_delay(mut self, retry_delay_ms: u32) -> Self {
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    /// Failed pages since the last successful one
    pub fn consecutive_failures(&self) -> u32 {
        self.failures
    }

    fn cancel_pending_retry(&self) {
        self.epoch.set(self.epoch.get() + 1);
    }

    fn schedule_reobserve(&mut self, delay_ms: u32) -> Result<(), DomError> {
        let Some(observer) = self.observer.as_ref().map(|(observer, _)| observer.clone()) else {
            wasm_warn!("sentinel: retry requested while not observing");
            return Ok(());
        };
        let sentinel = self.sentinel()?;
        let epoch = Rc::clone(&self.epoch);
        let scheduled_in = epoch.get();
        let reobserve = Closure::once_into_js(move || {
            if epoch.get() == scheduled_in {
                wasm_log!("sentinel: re-observing after failed page");
                observer.unobserve(&sentinel);
                observer.observe(&sentinel);
            }
        });
        window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            reobserve.unchecked_ref(),
            delay_ms as i32,
        )?;
        wasm_log!("sentinel: retry in {} ms (failure {})", delay_ms, self.failures);
        Ok(())
    }

    fn sentinel(&mut self) -> Result<Element, DomError> {
        if let Some(sentinel) = &self.sentinel {
            return Ok(sentinel.clone());
        }
        let sentinel = document()?.create_element("div")?;
        sentinel.set_class_name("scroll-sentinel");
        sentinel.set_attribute("aria-hidden", "true")?;
        sentinel.set_attribute("style", "height: 0; width: 100%;")?;
        self.gallery.insert_adjacent_element("afterend", &sentinel)?;
        self.sentinel = Some(sentinel.clone());
        Ok(sentinel)
    }

    fn observe(&mut self) -> Result<(), DomError> {
        let sentinel = self.sentinel()?;

        if let Some((observer, _)) = &self.observer {
            // Re-observing delivers a fresh entry, so a marker that is still
            // on screen after a short page fires again
            observer.unobserve(&sentinel);
            observer.observe(&sentinel);
            return Ok(());
        }

        let on_visible = Rc::clone(&self.on_visible);
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, _observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if visible {
                    wasm_log!("sentinel: visible, requesting next page");
                    on_visible();
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(&sentinel);
        self.observer = Some((observer, callback));
        wasm_log!("sentinel: observer created (threshold {})", self.threshold);
        Ok(())
    }

    fn stop(&mut self) {
        self.cancel_pending_retry();
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
            wasm_log!("sentinel: observer disconnected");
        }
    }
}

impl LoadTrigger for AutoScrollTrigger {
    fn activate(&mut self) {
        self.failures = 0;
        self.cancel_pending_retry();
        if let Err(err) = self.observe() {
            wasm_error!("sentinel: could not observe: {}", err);
        }
    }

    fn retry(&mut self) {
        self.failures += 1;
        let delay = retry_delay(self.retry_delay_ms, self.failures);
        if let Err(err) = self.schedule_reobserve(delay) {
            wasm_error!("sentinel: could not schedule retry: {}", err);
        }
    }

    fn deactivate(&mut self) {
        self.stop();
    }

    fn reset(&mut self) {
        self.failures = 0;
        self.stop();
    }
}

impl Drop for AutoScrollTrigger {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_delay_backs_off() {
        assert_eq!(retry_delay(2000, 1), 2000);
        assert_eq!(retry_delay(2000, 2), 4000);
        assert_eq!(retry_delay(2000, 3), 8000);
        assert_eq!(retry_delay(2000, 5), 32000);
        assert_eq!(retry_delay(2000, 9), 32000);
        assert_eq!(retry_delay(0, 3), 0);
    }
}
