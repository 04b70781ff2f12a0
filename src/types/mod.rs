//! Strongly-typed domain types for safer APIs.
//!
//! Newtypes over the launch-grid axes keep the (variable, element)
//! decomposition self-documenting and prevent parameter mix-ups. All
//! newtypes are `#[repr(transparent)]` and compile away.

mod indices;

pub use indices::{ElementIndex, VariableIndex};
