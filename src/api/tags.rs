//! Tag editor bindings
//!
//! The page fetches the tag vocabulary itself and passes it in as an array
//! of strings.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement};
use crate::api::errors::DomError;
use crate::api::helpers;
use crate::tags::{self, TagOption};

/// `[{ value, label, selected }]` for a tag `<select>`
#[wasm_bindgen(js_name = tagOptions)]
pub fn tag_options(vocabulary_js: JsValue, selected: &str) -> Result<JsValue, JsValue> {
    let vocabulary: Vec<String> =
        helpers::deserialize(vocabulary_js, "Failed to deserialize tag vocabulary")?;
    helpers::serialize(
        &tags::tag_options(&vocabulary, selected),
        "Failed to serialize tag options",
    )
}

fn option_element(document: &Document, option: &TagOption) -> Result<Element, DomError> {
    let el = document.create_element("option")?;
    el.set_attribute("value", &option.value)?;
    if option.selected {
        el.set_attribute("selected", "selected")?;
    }
    el.set_text_content(Some(&option.label));
    Ok(el)
}

/// Append the vocabulary (plus "other...") to the `<select>` with `select_id`
#[wasm_bindgen(js_name = fillTagSelect)]
pub fn fill_tag_select(
    select_id: &str,
    vocabulary_js: JsValue,
    selected: &str,
) -> Result<(), JsValue> {
    let vocabulary: Vec<String> =
        helpers::deserialize(vocabulary_js, "Failed to deserialize tag vocabulary")?;
    let document = helpers::document()?;
    let select = helpers::element_by_id(&document, select_id)?;
    for option in tags::tag_options(&vocabulary, selected) {
        let el = option_element(&document, &option)?;
        select.append_child(&el)?;
    }
    Ok(())
}

/// Show the free-text tag input only while "other..." is selected
#[wasm_bindgen(js_name = onChangeToOther)]
pub fn on_change_to_other(value: &str, hidden_id: &str) -> Result<(), JsValue> {
    let document = helpers::document()?;
    let input: HtmlInputElement = helpers::typed_element_by_id(&document, hidden_id)?;
    input.set_type(tags::other_input_type(value));
    Ok(())
}

/// `component[index].key`
#[wasm_bindgen(js_name = tagFieldName)]
pub fn tag_field_name(component: &str, index: usize, key: &str) -> String {
    tags::tag_field_name(component, index, key)
}
