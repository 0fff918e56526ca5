//! Parsing and serialization of saved layouts.
//!
//! Layouts are persisted as JSON text; see [`layout_json`] for the format.

pub mod layout_json;

// Re-export commonly used functions
pub use layout_json::{deserialize, serialize};
