//! Models module for the sample tracker table selection
//!
//! Pure data structures: grid dimensions, per-cell selection flags
//! and widget configuration.

pub mod grid;
pub mod selection;
pub mod config;

// Re-export commonly used types
pub use grid::{Coordinate, FlatIndex, Grid, GridError};
pub use selection::SelectionState;
pub use config::{SelectConfig, DEFAULT_SELECTED_CLASS};
