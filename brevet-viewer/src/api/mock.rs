//! Mock brevet times client for testing without a live API.
//!
//! Serves canned bodies or errors keyed by action and format, and
//! counts fetches so tests can assert that the idle path makes no
//! remote call.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{Action, Format, TimesQuery};

use super::BrevetApi;
use super::error::ApiError;

/// Mock client that serves pre-registered responses.
#[derive(Clone, Default)]
pub struct MockBrevetClient {
    responses: HashMap<(Action, Format), Result<String, ApiError>>,
    calls: Arc<AtomicUsize>,
}

impl MockBrevetClient {
    /// Create an empty mock; every fetch answers with a 404 until a
    /// response is registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a successful body for an action/format pair.
    pub fn with_body(
        mut self,
        action: Action,
        format: Format,
        body: impl Into<String>,
    ) -> Self {
        self.responses.insert((action, format), Ok(body.into()));
        self
    }

    /// Register a failure for an action/format pair.
    pub fn with_error(mut self, action: Action, format: Format, error: ApiError) -> Self {
        self.responses.insert((action, format), Err(error));
        self
    }

    /// How many fetches have been made against this mock.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BrevetApi for MockBrevetClient {
    async fn fetch_times(&self, query: &TimesQuery) -> Result<String, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.responses
            .get(&(query.action, query.format))
            .cloned()
            .unwrap_or(Err(ApiError::Status { status: 404 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(action: Action, format: Format) -> TimesQuery {
        TimesQuery::new(action, format, None)
    }

    #[tokio::test]
    async fn serves_registered_body() {
        let mock = MockBrevetClient::new().with_body(Action::ListAll, Format::Json, "{}");

        let body = mock
            .fetch_times(&query(Action::ListAll, Format::Json))
            .await
            .unwrap();
        assert_eq!(body, "{}");
    }

    #[tokio::test]
    async fn serves_registered_error() {
        let mock = MockBrevetClient::new().with_error(
            Action::ListAll,
            Format::Json,
            ApiError::Transport {
                message: "unreachable".into(),
            },
        );

        let err = mock
            .fetch_times(&query(Action::ListAll, Format::Json))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unreachable"));
    }

    #[tokio::test]
    async fn unregistered_query_is_404() {
        let mock = MockBrevetClient::new();

        let err = mock
            .fetch_times(&query(Action::ListOpenOnly, Format::Csv))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Status { status: 404 });
    }

    #[tokio::test]
    async fn counts_calls() {
        let mock = MockBrevetClient::new().with_body(Action::ListAll, Format::Json, "{}");
        assert_eq!(mock.call_count(), 0);

        let _ = mock.fetch_times(&query(Action::ListAll, Format::Json)).await;
        let _ = mock.fetch_times(&query(Action::ListAll, Format::Csv)).await;
        assert_eq!(mock.call_count(), 2);
    }
}
