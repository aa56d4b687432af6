//! Application state for the web layer.

use std::sync::Arc;

use crate::api::BrevetApi;

/// Shared application state.
///
/// Generic over the API capability so the route handlers can be tested
/// against [`crate::api::MockBrevetClient`] without network access.
pub struct AppState<C: BrevetApi> {
    /// Brevet times API client.
    pub api: Arc<C>,
}

impl<C: BrevetApi> AppState<C> {
    /// Create a new app state.
    pub fn new(api: C) -> Self {
        Self { api: Arc::new(api) }
    }
}

// Manual impl: `#[derive(Clone)]` would needlessly require `C: Clone`.
impl<C: BrevetApi> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}
