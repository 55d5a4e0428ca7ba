//! Selection query for form submission
//!
//! Selected cells are posted as hidden fields `key[0]`, `key[1]`, ... whose
//! values are the flat indices in ascending order.

use serde::{Deserialize, Serialize};
use crate::models::grid::FlatIndex;
use crate::select::controller::TableSelection;

/// One hidden form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// Field name for the `position`-th selected cell
pub fn field_name(key: &str, position: usize) -> String {
    format!("{}[{}]", key, position)
}

/// Hidden fields for an ascending list of selected indices
pub fn fields_for(key: &str, selected: &[FlatIndex]) -> Vec<FormField> {
    selected
        .iter()
        .enumerate()
        .map(|(position, index)| FormField {
            name: field_name(key, position),
            value: index.to_string(),
        })
        .collect()
}

impl TableSelection {
    /// Hidden fields describing the current selection
    pub fn form_fields(&self, key: &str) -> Vec<FormField> {
        fields_for(key, &self.find_selected())
    }
}
