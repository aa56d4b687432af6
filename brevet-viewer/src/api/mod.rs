//! Brevet times API access.
//!
//! Provides the real HTTP client, a mock for tests, and the capability
//! trait the web layer is written against.

mod client;
mod error;
mod mock;

pub use client::{ApiClient, ApiConfig};
pub use error::ApiError;
pub use mock::MockBrevetClient;

use std::future::Future;

use crate::domain::TimesQuery;

/// Capability to fetch a raw payload from the brevet times API.
///
/// The web layer is generic over this trait so tests can substitute
/// [`MockBrevetClient`] for the real HTTP client instead of making
/// network calls.
pub trait BrevetApi: Send + Sync + 'static {
    /// Fetch the raw response body for a query.
    ///
    /// Returns the body on HTTP 200; any other status or a transport
    /// failure is an [`ApiError`].
    fn fetch_times(
        &self,
        query: &TimesQuery,
    ) -> impl Future<Output = Result<String, ApiError>> + Send;
}
