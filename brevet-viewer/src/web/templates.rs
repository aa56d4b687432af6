//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Format;
use crate::render::TableView;

/// The times page: query form plus results block.
///
/// Rendered for every request to `/`, whatever the outcome. Askama
/// escapes all interpolated values, so remote payloads and echoed user
/// input are safe to embed.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Format to keep selected in the form.
    pub format: Format,
    /// Top value to echo back into the form.
    pub top: String,
    /// What to show in the results block.
    pub results: ResultsView,
}

/// Outcome of one request cycle, as shown to the user.
#[derive(Debug, Clone)]
pub enum ResultsView {
    /// No action requested yet.
    Idle,
    /// Pretty-printed JSON payload.
    Json(String),
    /// Parsed CSV payload.
    Table(TableView),
    /// Transport, status, validation, or parse failure.
    Error(String),
}
