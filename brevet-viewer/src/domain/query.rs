//! Validated query against the brevet times API.

use super::{Action, Format, TopK};

/// A fully validated request to the remote API.
///
/// Because every field is a closed domain type, the URL built from a
/// `TimesQuery` can only ever contain the fixed wire identifiers and a
/// range-checked number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimesQuery {
    /// Which of the three queries to run.
    pub action: Action,
    /// Requested payload format.
    pub format: Format,
    /// Optional row limit.
    pub top: Option<TopK>,
}

impl TimesQuery {
    /// Create a query.
    pub fn new(action: Action, format: Format, top: Option<TopK>) -> Self {
        Self { action, format, top }
    }

    /// Build the outbound URL: `{base}/{action}/{format}[?top={n}]`.
    ///
    /// A trailing slash on the base address is tolerated.
    pub fn url(&self, base: &str) -> String {
        let mut url = format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            self.action.as_str(),
            self.format.as_str()
        );
        if let Some(top) = self.top {
            url.push_str(&format!("?top={top}"));
        }
        url
    }
}
