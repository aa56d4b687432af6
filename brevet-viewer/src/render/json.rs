//! JSON payload pretty-printing.

use serde_json::Value;

/// Re-serialize a JSON payload with stable, human-readable indentation.
///
/// The output round-trips to the same structured value as the input;
/// only whitespace changes.
pub fn pretty_json(body: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    serde_json::to_string_pretty(&value)
}
