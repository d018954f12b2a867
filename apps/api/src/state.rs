use std::sync::Arc;

use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide document store, opened once at startup.
    pub store: Arc<dyn DocumentStore>,
}
