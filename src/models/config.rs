//! Table selection configuration
//!
//! Deserialized from a plain JS object, e.g.
//! `{ selectedClass: "picked", suppressContextMenu: false }`.
//! Missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

/// Class toggled on a cell element while it is selected
pub const DEFAULT_SELECTED_CLASS: &str = "selected";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectConfig {
    pub selected_class: String,

    /// Keep ctrl-click from opening the browser menu on table elements
    pub suppress_context_menu: bool,

    /// Cancel `selectstart` so shift-click does not highlight text
    pub suppress_text_select: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            selected_class: DEFAULT_SELECTED_CLASS.to_string(),
            suppress_context_menu: true,
            suppress_text_select: true,
        }
    }
}
