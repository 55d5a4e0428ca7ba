//! Table selection DOM binding
//!
//! Locates the data cells and labelled headers of a table, installs one
//! mousedown handler per element and mirrors the selection into a class on
//! each cell. Grid dimensions are read once here and never re-derived.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlCollection, MouseEvent};
use crate::api::errors::DomError;
use crate::api::form::SubmitHook;
use crate::api::helpers::{self, Listener};
use crate::models::{Grid, GridError, SelectConfig};
use crate::select::{Modifiers, PointerInput, TableSelection, Target};
use crate::{wasm_error, wasm_info, wasm_warn};

fn collection_elements(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

/// Cells and headers found in a table, in document order
struct TableLayout {
    grid: Grid,
    cells: Vec<Element>,
    column_headers: Vec<Element>,
    row_headers: Vec<Element>,
}

impl TableLayout {
    fn scan(table: &Element) -> Result<Self, DomError> {
        let cells = collection_elements(&table.get_elements_by_tag_name("td"));

        // Only rows holding data cells count; header rows are skipped
        let row_lengths: Vec<usize> = collection_elements(&table.get_elements_by_tag_name("tr"))
            .iter()
            .map(|row| row.get_elements_by_tag_name("td").length() as usize)
            .filter(|&len| len > 0)
            .collect();
        let grid = Grid::from_row_lengths(&row_lengths)?;
        if grid.total_cells() != cells.len() {
            return Err(GridError::CellCountMismatch {
                cells: cells.len(),
                rows: grid.row_count(),
            }
            .into());
        }

        // The corner header has no label and is dropped by content
        let mut headers: Vec<Element> = collection_elements(&table.get_elements_by_tag_name("th"))
            .into_iter()
            .filter(|th| {
                th.text_content()
                    .map(|label| !label.trim().is_empty())
                    .unwrap_or(false)
            })
            .collect();

        let split = headers.len().min(grid.columns_per_row());
        let mut row_headers = headers.split_off(split);
        if row_headers.len() > grid.row_count() {
            wasm_warn!(
                "{} row headers for {} rows, ignoring the extra ones",
                row_headers.len(),
                grid.row_count()
            );
            row_headers.truncate(grid.row_count());
        }

        Ok(Self {
            grid,
            cells,
            column_headers: headers,
            row_headers,
        })
    }

    /// Every clickable element paired with what it selects
    fn targets(&self) -> impl Iterator<Item = (&Element, Target)> {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, el)| (el, Target::Cell(i)));
        let columns = self
            .column_headers
            .iter()
            .enumerate()
            .map(|(c, el)| (el, Target::ColumnHeader(c)));
        let rows = self
            .row_headers
            .iter()
            .enumerate()
            .map(|(r, el)| (el, Target::RowHeader(r)));
        cells.chain(columns).chain(rows)
    }
}

/// Cell elements plus the class that marks them selected
struct CellMarker {
    cells: Vec<Element>,
    selected_class: String,
}

impl CellMarker {
    /// Bring every cell's class in line with the selection
    fn sync(&self, selection: &TableSelection) -> Result<(), JsValue> {
        for (i, cell) in self.cells.iter().enumerate() {
            cell.class_list()
                .toggle_with_force(&self.selected_class, selection.is_selected(i))?;
        }
        Ok(())
    }
}

/// Cherry-picking selection over one HTML table
#[wasm_bindgen]
pub struct TableSelect {
    table_id: String,
    selection: Rc<RefCell<TableSelection>>,
    marker: Rc<CellMarker>,
    listeners: Vec<Listener>,
    submit: Option<SubmitHook>,
}

#[wasm_bindgen]
impl TableSelect {
    /// Attach selection handling to the table with the given id
    #[wasm_bindgen(constructor)]
    pub fn new(table_id: &str) -> Result<TableSelect, JsValue> {
        Ok(Self::build(table_id, SelectConfig::default())?)
    }

    /// Like the constructor, with a `SelectConfig` object
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(table_id: &str, config_js: JsValue) -> Result<TableSelect, JsValue> {
        let config: SelectConfig = if config_js.is_undefined() || config_js.is_null() {
            SelectConfig::default()
        } else {
            helpers::deserialize(config_js, "Failed to deserialize select config")?
        };
        Ok(Self::build(table_id, config)?)
    }

    #[wasm_bindgen(getter, js_name = rowCount)]
    pub fn row_count(&self) -> usize {
        self.selection.borrow().grid().row_count()
    }

    #[wasm_bindgen(getter, js_name = columnsPerRow)]
    pub fn columns_per_row(&self) -> usize {
        self.selection.borrow().grid().columns_per_row()
    }

    /// Selected flat indices, ascending
    #[wasm_bindgen(js_name = findSelected)]
    pub fn find_selected(&self) -> js_sys::Uint32Array {
        let selected: Vec<u32> = self
            .selection
            .borrow()
            .find_selected()
            .into_iter()
            .map(|i| i as u32)
            .collect();
        js_sys::Uint32Array::from(selected.as_slice())
    }

    /// `[{ name, value }]` hidden fields for the current selection
    #[wasm_bindgen(js_name = formFields)]
    pub fn form_fields(&self, key: &str) -> Result<JsValue, JsValue> {
        let fields = self.selection.borrow().form_fields(key);
        helpers::serialize(&fields, "Failed to serialize form fields")
    }

    /// Unselect everything and forget the pivots
    pub fn clear(&self) -> Result<(), JsValue> {
        let mut selection = self.selection.borrow_mut();
        selection.clear();
        self.marker.sync(&selection)
    }

    /// Post the selection with the form: `key[position] = flatIndex`.
    ///
    /// Use this when the page already holds a selector for the table;
    /// calling it again moves the hook to the new form.
    #[wasm_bindgen(js_name = attachSubmit)]
    pub fn attach_submit(&mut self, form_id: &str, key: &str) -> Result<(), JsValue> {
        let hook = SubmitHook::attach(form_id, key, self.selection.clone())?;
        wasm_info!("submit hook on #{} for table #{} (key {})", form_id, self.table_id, key);
        self.submit = Some(hook);
        Ok(())
    }

    /// Remove every listener this instance installed
    pub fn detach(&mut self) {
        self.listeners.clear();
        self.submit = None;
    }
}

impl TableSelect {
    fn build(table_id: &str, config: SelectConfig) -> Result<TableSelect, DomError> {
        let document = helpers::document()?;
        let table = helpers::element_by_id(&document, table_id)?;
        let layout = TableLayout::scan(&table)?;

        let selection = Rc::new(RefCell::new(TableSelection::new(layout.grid)));
        let marker = Rc::new(CellMarker {
            cells: layout.cells.clone(),
            selected_class: config.selected_class.clone(),
        });

        let mut listeners = Vec::new();
        for (element, target) in layout.targets() {
            let element: &EventTarget = element.as_ref();
            let selection = selection.clone();
            let marker = marker.clone();
            listeners.push(Listener::attach(element, "mousedown", move |event: Event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let input = PointerInput {
                    button: mouse.button().into(),
                    modifiers: Modifiers {
                        ctrl: mouse.ctrl_key(),
                        shift: mouse.shift_key(),
                    },
                    target,
                };
                let mut selection = selection.borrow_mut();
                if selection.handle(input) {
                    if let Err(e) = marker.sync(&selection) {
                        wasm_error!("failed to update cell classes: {:?}", e);
                    }
                }
            })?);

            if config.suppress_context_menu {
                listeners.push(Listener::prevent_default(element, "contextmenu")?);
            }
            if config.suppress_text_select {
                listeners.push(Listener::prevent_default(element, "selectstart")?);
            }
        }

        wasm_info!(
            "table #{}: {} rows x {} columns, {} column headers, {} row headers",
            table_id,
            layout.grid.row_count(),
            layout.grid.columns_per_row(),
            layout.column_headers.len(),
            layout.row_headers.len()
        );

        Ok(TableSelect {
            table_id: table_id.to_string(),
            selection,
            marker,
            listeners,
            submit: None,
        })
    }
}

/// Attach selection handling to a table.
///
/// To post the selection later, call `attachSubmit` on the returned object
/// rather than `submitSelect`, which builds a selector of its own.
#[wasm_bindgen(js_name = tableSelect)]
pub fn table_select(table_id: &str) -> Result<TableSelect, JsValue> {
    TableSelect::new(table_id)
}

/// Attach selection handling to a table and post the selection with a form.
///
/// This replaces `tableSelect` for that table: it installs its own click
/// handlers, so calling both on one table runs two selections side by side.
/// A page that already has a selector calls `attachSubmit` on it instead.
/// Keep the returned object alive for as long as the page uses the table.
#[wasm_bindgen(js_name = submitSelect)]
pub fn submit_select(form_id: &str, table_id: &str, key: &str) -> Result<TableSelect, JsValue> {
    let mut select = TableSelect::new(table_id)?;
    select.attach_submit(form_id, key)?;
    Ok(select)
}
