use std::sync::Arc;

use crate::recommend::engine::RecommendationEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup from the validated catalog; read-only afterwards.
    pub engine: Arc<RecommendationEngine>,
}
