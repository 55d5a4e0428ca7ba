//! Error types for the DOM bindings
//!
//! Grid construction failures come up from the model layer; everything else
//! is a missing or unexpected DOM node.

use thiserror::Error;
use wasm_bindgen::JsValue;
use crate::models::GridError;

#[derive(Debug, Clone, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    ElementNotFound(String),

    #[error("element #{0} has an unexpected type")]
    WrongElementType(String),

    #[error("invalid table layout: {0}")]
    Grid(#[from] GridError),

    /// Exception thrown by a DOM call
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        let msg = err.to_string();
        crate::api::helpers::log_error(&msg);
        JsValue::from_str(&msg)
    }
}
