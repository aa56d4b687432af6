//! Data transfer objects for web requests.

use serde::Deserialize;

/// Raw query parameters for the times page.
///
/// Values arrive as untyped strings; the handler validates them into
/// domain types before any outbound request is built.
#[derive(Debug, Default, Deserialize)]
pub struct TimesPageParams {
    /// Which query to run. Absent means show the idle page.
    pub action: Option<String>,

    /// Requested output format (defaults to `json`).
    pub format: Option<String>,

    /// Optional row limit, 1 to 50. The form submits an empty string
    /// when the field is left blank.
    pub top: Option<String>,
}
