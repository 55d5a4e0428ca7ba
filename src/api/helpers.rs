//! Plumbing shared by the table, form, quick-operation and tag bindings
//!
//! Console output tagged with the `[tracker]` prefix, conversion of config
//! and result structs across the JS boundary, element lookups by id and the
//! listener guard that unhooks its closure when dropped.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use web_sys::{Document, Element, Event, EventTarget};
use crate::api::errors::DomError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = debug)]
    fn console_debug(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = info)]
    fn console_info(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

const CONSOLE_PREFIX: &str = "[tracker]";

/// Console line as the browser shows it, e.g. `[tracker] table #plate: 8 rows`
pub fn console_line(msg: &str) -> String {
    format!("{} {}", CONSOLE_PREFIX, msg)
}

/// Selection and submit traffic, visible with the console's verbose level
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Table setup and hook installation
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Markup that was tolerated but partly ignored
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Failures surfaced to the page
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    console_debug(&console_line(msg));
}

pub fn log_info(msg: &str) {
    console_info(&console_line(msg));
}

pub fn log_warn(msg: &str) {
    console_warn(&console_line(msg));
}

pub fn log_error(msg: &str) {
    console_error(&console_line(msg));
}

/// Log a failed JS conversion and hand it back as a thrown string
fn boundary_error(context: &str, cause: impl Display) -> JsValue {
    let msg = format!("{}: {}", context, cause);
    log_error(&msg);
    JsValue::from_str(&msg)
}

/// Read a config object or vocabulary passed in from the page
pub fn deserialize<T: DeserializeOwned>(value: JsValue, context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| boundary_error(context, e))
}

/// Hand form fields or tag options back to the page as plain objects
pub fn serialize<T: Serialize>(value: &T, context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| boundary_error(context, e))
}

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::ElementNotFound(id.to_string()))
}

/// Look up an element by id and cast it to a concrete element type
pub fn typed_element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, DomError> {
    element_by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElementType(id.to_string()))
}

/// An installed event listener; removed from its target when dropped
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(DomError::from)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Listener that only cancels the default action
    pub fn prevent_default(target: &EventTarget, event: &'static str) -> Result<Self, DomError> {
        Self::attach(target, event, |e: Event| e.prevent_default())
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
