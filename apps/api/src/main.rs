mod config;
mod db;
mod errors;
mod export;
mod extraction;
mod matching;
mod ranking;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::extraction::ExtractorRegistry;
use crate::matching::SkillVocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-rank API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and bootstrap the results table
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    // Build the skill vocabulary from config
    let vocabulary = Arc::new(SkillVocabulary::new(&config.skill_vocabulary));
    if vocabulary.is_empty() {
        warn!("Skill vocabulary is empty; every skill-match score will be 0");
    }
    info!("Skill vocabulary loaded ({} skills)", vocabulary.len());

    // One extractor per supported upload format
    let extractors = Arc::new(ExtractorRegistry::new());

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        vocabulary,
        extractors,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
