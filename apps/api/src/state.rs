use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerateText;

/// Shared application state injected into all route handlers via Axum
/// extractors. Request handling keeps no other shared mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Text-generation backend behind the trait seam so tests can swap in a
    /// scripted stub. Production wires a `GeminiClient` here.
    pub llm: Arc<dyn GenerateText>,
}
