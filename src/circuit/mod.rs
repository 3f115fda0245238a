//! Calculator field representation.
//!
//! This module holds the four linked quantities of the calculator and the
//! phase mode in a [`CircuitState`], together with the normalization applied
//! to text typed into a field.

mod input;
mod types;

pub use input::{format_field, normalize_value, parse_field, round_to};
pub use types::*;
