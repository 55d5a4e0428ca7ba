//! Table cell/row/column selection
//!
//! ## Modules
//!
//! - `target`: pointer button, modifier keys and hit target classification
//! - `controller`: the selection state machine (pivots, toggles, ranges)
//! - `query`: selected indices and hidden form fields for submission

pub mod target;
pub mod controller;
pub mod query;

pub use target::{Modifiers, PointerButton, PointerInput, Target};
pub use controller::{PivotPair, RangeOrder, TableSelection};
pub use query::{field_name, fields_for, FormField};
