use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::extraction::ExtractorRegistry;
use crate::matching::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Immutable skill vocabulary, built once from config at startup.
    pub vocabulary: Arc<SkillVocabulary>,
    /// One text extractor per supported upload format.
    pub extractors: Arc<ExtractorRegistry>,
}
