//! Form submission hook
//!
//! On `submit` the current selection is written into the form as hidden
//! inputs. This runs synchronously inside the submit event, before the
//! browser serializes the form.

use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, Event, HtmlFormElement};
use crate::api::errors::DomError;
use crate::api::helpers::{self, Listener};
use crate::select::{FormField, TableSelection};
use crate::{wasm_error, wasm_log};

fn hidden_input(document: &Document, field: &FormField) -> Result<Element, DomError> {
    let input = document.create_element("input")?;
    input.set_attribute("type", "hidden")?;
    input.set_attribute("name", &field.name)?;
    input.set_attribute("value", &field.value)?;
    Ok(input)
}

/// Replace the previously appended inputs with a fresh set
fn write_fields(
    document: &Document,
    form: &HtmlFormElement,
    fields: &[FormField],
    appended: &mut Vec<Element>,
) -> Result<(), DomError> {
    // A cancelled submit leaves the old inputs behind
    for stale in appended.drain(..) {
        stale.remove();
    }
    for field in fields {
        let input = hidden_input(document, field)?;
        form.append_child(&input)?;
        appended.push(input);
    }
    Ok(())
}

/// Installed submit listener for one form
pub struct SubmitHook {
    _listener: Listener,
}

impl SubmitHook {
    pub fn attach(
        form_id: &str,
        key: &str,
        selection: Rc<RefCell<TableSelection>>,
    ) -> Result<Self, DomError> {
        let document = helpers::document()?;
        let form: HtmlFormElement = helpers::typed_element_by_id(&document, form_id)?;
        let key = key.to_string();
        let form_for_submit = form.clone();
        let mut appended: Vec<Element> = Vec::new();

        let listener = Listener::attach(form.as_ref(), "submit", move |_event: Event| {
            let fields = selection.borrow().form_fields(&key);
            wasm_log!("submitting {} selected cells as {}[]", fields.len(), key);
            if let Err(e) = write_fields(&document, &form_for_submit, &fields, &mut appended) {
                wasm_error!("failed to add selection fields: {}", e);
            }
        })?;

        Ok(Self {
            _listener: listener,
        })
    }
}
