//! Sample tracker WASM API
//!
//! This module provides the JavaScript-facing API: DOM bindings over the
//! pure selection, quick-operation and tag logic in the rest of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serde bridging, DOM lookups, listener guard
//! - `errors`: `DomError` and its conversion to `JsValue`
//! - `table`: `TableSelect` cell/row/column selection over an HTML table
//! - `form`: submit hook writing the selection as hidden inputs
//! - `quick`: keypress redirects for the quick-operation inputs
//! - `tags`: tag `<select>` filling and the "other..." toggle

pub mod helpers;
pub mod errors;
pub mod table;
pub mod form;
pub mod quick;
pub mod tags;

pub use errors::DomError;
pub use table::{submit_select, table_select, TableSelect};
pub use quick::{quick_operations, QuickOperations};
pub use tags::{fill_tag_select, on_change_to_other, tag_field_name, tag_options};
