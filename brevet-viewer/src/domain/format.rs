//! Output format type.

use std::fmt;

/// Error returned when parsing an unknown format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format: {input}")]
pub struct InvalidFormat {
    input: String,
}

/// The output representation requested from the remote API.
///
/// `json` is pretty-printed as structured data; `csv` is rendered as an
/// HTML table. Defaults to [`Format::Json`] when the user picks nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Structured JSON payload.
    #[default]
    Json,
    /// Newline-delimited CSV payload.
    Csv,
}

impl Format {
    /// Parse a format from its wire identifier (`json` or `csv`).
    pub fn parse(s: &str) -> Result<Self, InvalidFormat> {
        match s {
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            _ => Err(InvalidFormat { input: s.to_string() }),
        }
    }

    /// Returns the wire identifier for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
        }
    }

    /// Whether this is the JSON format (used for form state in templates).
    pub fn is_json(&self) -> bool {
        matches!(self, Format::Json)
    }

    /// Whether this is the CSV format (used for form state in templates).
    pub fn is_csv(&self) -> bool {
        matches!(self, Format::Csv)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
