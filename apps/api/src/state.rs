use std::sync::Arc;

use crate::llm_client::ChatBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend, built once at startup. Tests swap in a stub.
    pub llm: Arc<dyn ChatBackend>,
}
