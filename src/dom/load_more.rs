//! "Load more" button trigger

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use crate::controller::LoadTrigger;
use crate::dom::set_display;
use crate::{wasm_error, wasm_log};

/// Shows the button while more results may exist; a click asks for the next page
pub struct ManualTrigger {
    button: Element,
    on_click: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl ManualTrigger {
    pub fn new(button: Element, on_click: Rc<dyn Fn()>) -> Self {
        let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            event.prevent_default();
            on_click();
        });

        let registered = button
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(|err| wasm_error!("load-more: click listener not attached: {:?}", err))
            .is_ok();

        let mut trigger = Self {
            button,
            on_click: registered.then_some(handler),
        };
        trigger.reset();
        trigger
    }
}

impl LoadTrigger for ManualTrigger {
    fn activate(&mut self) {
        wasm_log!("load-more: shown");
        set_display(&self.button, "block");
    }

    fn deactivate(&mut self) {
        wasm_log!("load-more: hidden");
        set_display(&self.button, "none");
    }

    fn reset(&mut self) {
        set_display(&self.button, "none");
    }
}

impl Drop for ManualTrigger {
    fn drop(&mut self) {
        if let Some(handler) = self.on_click.take() {
            if let Err(err) = self
                .button
                .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            {
                wasm_error!("load-more: click listener not removed: {:?}", err);
            }
        }
    }
}
