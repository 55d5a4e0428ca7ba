//! Quick-operation keypress bindings
//!
//! Enter in one of the quick inputs redirects to the matching page. Inputs
//! that are missing from the page are skipped.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, KeyboardEvent};
use crate::api::errors::DomError;
use crate::api::helpers::{self, Listener};
use crate::quick;
use crate::{wasm_error, wasm_log};

pub const REGISTER_INPUT_ID: &str = "qRegister";
pub const FIND_INPUT_ID: &str = "qFind";
pub const TRANSFER_INPUT_IDS: [&str; 3] = ["fromTran", "toTran", "projTran"];

fn input_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

fn redirect(url: &str) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    window.location().assign(url)?;
    Ok(())
}

/// Keypress listener that redirects to `url_for(document)` on Enter
fn on_enter<F>(document: &Document, id: &str, url_for: F) -> Result<Option<Listener>, DomError>
where
    F: Fn(&Document) -> Option<String> + 'static,
{
    let Some(input) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    let doc = document.clone();
    let listener = Listener::attach(input.as_ref(), "keypress", move |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if !quick::is_submit_key(&key.key()) {
            return;
        }
        if let Some(url) = url_for(&doc) {
            event.prevent_default();
            wasm_log!("quick operation -> {}", url);
            if let Err(e) = redirect(&url) {
                wasm_error!("redirect to {} failed: {}", url, e);
            }
        }
    })?;
    Ok(Some(listener))
}

/// Keypress handlers for the register, find and transfer mini forms
#[wasm_bindgen]
pub struct QuickOperations {
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl QuickOperations {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<QuickOperations, JsValue> {
        Ok(Self::bind()?)
    }

    /// Number of inputs that received a handler
    #[wasm_bindgen(getter, js_name = boundInputs)]
    pub fn bound_inputs(&self) -> usize {
        self.listeners.len()
    }
}

impl QuickOperations {
    fn bind() -> Result<QuickOperations, DomError> {
        let document = helpers::document()?;
        let mut listeners = Vec::new();

        listeners.extend(on_enter(&document, REGISTER_INPUT_ID, |d| {
            quick::register_url(&input_value(d, REGISTER_INPUT_ID))
        })?);
        listeners.extend(on_enter(&document, FIND_INPUT_ID, |d| {
            quick::find_url(&input_value(d, FIND_INPUT_ID))
        })?);

        // Enter in any of the three transfer inputs submits all three
        for id in TRANSFER_INPUT_IDS {
            listeners.extend(on_enter(&document, id, |d| {
                let [from, to, project] = TRANSFER_INPUT_IDS.map(|id| input_value(d, id));
                quick::transfer_url(&from, &to, &project)
            })?);
        }

        Ok(QuickOperations { listeners })
    }
}

/// Install the quick-operation handlers on the current page
#[wasm_bindgen(js_name = quickOperations)]
pub fn quick_operations() -> Result<QuickOperations, JsValue> {
    QuickOperations::new()
}
