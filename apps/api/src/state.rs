use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generative backend. Production wires the Anthropic client;
    /// tests substitute a canned implementation.
    pub llm: Arc<dyn TextGenerator>,
}
