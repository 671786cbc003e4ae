mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod profiles;
mod recommendations;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::GeminiClient;
use crate::recommendations::links::HttpLinkProber;
use crate::recommendations::pipeline::RecommendationPipeline;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Learnpath API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (optional)
    let db = match &config.database_url {
        Some(url) => Some(create_pool(url).await?),
        None => {
            warn!("DATABASE_URL not set; profile persistence disabled");
            None
        }
    };

    // Initialize LLM client
    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_api_url.clone(),
    );
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize link prober
    let prober = HttpLinkProber::new(config.link_probe_timeout)?;
    info!(
        "Link prober initialized (timeout: {}s)",
        config.link_probe_timeout.as_secs()
    );

    let pipeline = RecommendationPipeline::new(Arc::new(llm), Arc::new(prober));

    // Build app state
    let state = AppState {
        db,
        pipeline,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
