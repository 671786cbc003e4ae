use sqlx::PgPool;

use crate::config::Config;
use crate::recommendations::pipeline::RecommendationPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no DATABASE_URL is configured; profile routes then answer 503.
    pub db: Option<PgPool>,
    /// Carries the injected model client and link prober.
    pub pipeline: RecommendationPipeline,
    pub config: Config,
}
