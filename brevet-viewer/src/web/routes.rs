//! HTTP route handlers.

use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::api::BrevetApi;
use crate::domain::{Action, Format, TimesQuery, TopK};
use crate::render;

use super::dto::TimesPageParams;
use super::state::AppState;
use super::templates::{IndexTemplate, ResultsView};

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router<C: BrevetApi>(state: AppState<C>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(times_page::<C>))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The times page.
///
/// Runs at most one remote query per page load. Every failure is
/// recovered here and rendered as a notice in the results block.
async fn times_page<C: BrevetApi>(
    State(state): State<AppState<C>>,
    Query(params): Query<TimesPageParams>,
) -> IndexTemplate {
    let results = match params.action.as_deref() {
        None => ResultsView::Idle,
        Some(action) => match collect(action, &params) {
            Ok(query) => run_query(state.api.as_ref(), &query).await,
            Err(message) => ResultsView::Error(message),
        },
    };

    // Sticky form state; an invalid selection falls back to the default.
    let format = params
        .format
        .as_deref()
        .and_then(|s| Format::parse(s).ok())
        .unwrap_or_default();
    let top = params.top.unwrap_or_default();

    IndexTemplate { format, top, results }
}

/// Validate raw parameters into a query against the remote API.
///
/// An empty `top` counts as absent: the form submits `top=` when the
/// field is left blank.
fn collect(action: &str, params: &TimesPageParams) -> Result<TimesQuery, String> {
    let action = Action::parse(action).map_err(|e| e.to_string())?;

    let format = match params.format.as_deref() {
        None => Format::default(),
        Some(s) => Format::parse(s).map_err(|e| e.to_string())?,
    };

    let top = match params.top.as_deref().filter(|s| !s.is_empty()) {
        None => None,
        Some(s) => Some(TopK::parse(s).map_err(|e| e.to_string())?),
    };

    Ok(TimesQuery::new(action, format, top))
}

/// Fetch one query and render the payload per its declared format.
async fn run_query<C: BrevetApi>(api: &C, query: &TimesQuery) -> ResultsView {
    let body = match api.fetch_times(query).await {
        Ok(body) => body,
        Err(e) => {
            warn!(action = %query.action, error = %e, "remote fetch failed");
            return ResultsView::Error(e.to_string());
        }
    };

    match query.format {
        Format::Json => match render::pretty_json(&body) {
            Ok(pretty) => ResultsView::Json(pretty),
            Err(e) => {
                debug!(error = %e, "JSON payload did not parse");
                ResultsView::Error("Failed to parse JSON response".to_string())
            }
        },
        Format::Csv => ResultsView::Table(render::parse_table(&body)),
    }
}
