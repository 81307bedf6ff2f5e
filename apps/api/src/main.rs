mod config;
mod errors;
mod models;
mod recommend;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::recommend::catalog::Catalog;
use crate::recommend::engine::RecommendationEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Recommender API v{}", env!("CARGO_PKG_VERSION"));

    // A malformed catalog is fatal
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::from_path(path)
                .with_context(|| format!("Invalid catalog at {}", path.display()))?
        }
        None => {
            info!("Loading embedded catalog");
            Catalog::embedded().context("Invalid embedded catalog")?
        }
    };

    let state = AppState {
        engine: Arc::new(RecommendationEngine::new(catalog)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
