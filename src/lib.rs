//! Sample Tracker UI WASM Module
//!
//! Browser-side helpers for the laboratory sample tracker. The centre piece is
//! the cherry-picking table selection: click, ctrl-click, shift-click and
//! ctrl+shift-click over cells, row headers and column headers, with the
//! selection posted back as hidden form fields.

pub mod models;
pub mod select;
pub mod quick;
pub mod tags;
pub mod api;

// Re-export commonly used types
pub use models::{Coordinate, FlatIndex, Grid, GridError, SelectConfig, SelectionState};
pub use select::{FormField, Modifiers, PivotPair, PointerButton, PointerInput, TableSelection, Target};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        api::helpers::log_warn("logger already initialized");
    }

    log::info!("Sample tracker WASM module initialized");
}
