//! Input handling module
//!
//! Provides raw input state tracking and logical action bindings.

mod bindings;
mod state;

pub use bindings::{Action, BindingSet, parse_key_label};
pub use state::Input;
