//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::AggregateRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Aggregate store instance for bucket reads
    pub repository: Arc<dyn AggregateRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn AggregateRepository>) -> Self {
        Self { repository }
    }
}
