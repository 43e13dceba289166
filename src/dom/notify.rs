//! Toast notifications

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};
use crate::controller::Notifier;
use crate::dom::window;
use crate::errors::DomError;
use crate::wasm_error;

/// Stacks short-lived messages in a fixed corner container
pub struct ToastNotifier {
    document: Document,
    container: Element,
    timeout_ms: u32,
}

impl ToastNotifier {
    pub fn new(document: &Document, timeout_ms: u32) -> Result<Self, DomError> {
        let container = document.create_element("div")?;
        container.set_class_name("toasts");
        container.set_attribute("aria-live", "polite")?;
        document
            .body()
            .ok_or_else(|| DomError::MissingElement("body".to_string()))?
            .append_child(&container)?;

        Ok(Self {
            document: document.clone(),
            container,
            timeout_ms,
        })
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    fn show(&self, kind: &str, message: &str) -> Result<(), DomError> {
        let toast = self.document.create_element("div")?;
        toast.set_class_name(&format!("toast toast--{}", kind));
        toast.set_text_content(Some(message));
        self.container.append_child(&toast)?;

        let remove = Closure::once_into_js(move || toast.remove());
        window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.unchecked_ref(),
            self.timeout_ms as i32,
        )?;
        Ok(())
    }
}

impl Notifier for ToastNotifier {
    fn failure(&mut self, message: &str) {
        if let Err(err) = self.show("failure", message) {
            wasm_error!("toast failed: {} ({})", err, message);
        }
    }

    fn info(&mut self, message: &str) {
        if let Err(err) = self.show("info", message) {
            wasm_error!("toast failed: {} ({})", err, message);
        }
    }
}
