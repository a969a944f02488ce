//! Output formatting for results.
//!
//! - [`terminal`] - numbered listings with colors
//! - [`json`] - JSON arrays through serde_json
//! - [`reverse_pointer`] - reverse DNS names for addresses

mod json;
mod ptr;
mod terminal;

pub use json::{write_json, PtrRecord};
pub use ptr::reverse_pointer;
pub use terminal::{format_field, truncation_notice, write_addresses, write_networks, write_pointers};
