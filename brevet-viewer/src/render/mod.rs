//! Response rendering.
//!
//! Turns raw payloads into display-ready data: JSON is pretty-printed,
//! CSV is parsed into a table. HTML escaping happens later, in the
//! templates.

mod json;
mod table;

pub use json::pretty_json;
pub use table::{TableView, parse_table};
