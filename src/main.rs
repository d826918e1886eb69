//! Sentimeter HTTP scoring server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin sentimeter-server
//! ```
//!
//! # API Endpoints
//!
//! - `POST /analyze` - Score a batch of texts
//! - `GET /health` - Basic health check
//!
//! # Environment
//!
//! - `SENTIMETER_HOST` / `SENTIMETER_PORT` - bind address (default 0.0.0.0:8000)
//! - `SENTIMETER_ALLOWED_ORIGIN` - CORS origin (default http://localhost:5173)
//! - `SENTIMETER_LEXICON_PATH` - load a lexicon file instead of the bundled one
//! - `SENTIMETER_LEXICON_URL` - fetch the lexicon over HTTPS (cached at
//!   `SENTIMETER_LEXICON_CACHE`, default `lexicon-cache/lexicon.txt`)

use std::sync::Arc;

use sentimeter::analyzer::Lexicon;
use sentimeter::server::{create_router, AppState, ServerConfig};
use sentimeter::SentimentIntensityAnalyzer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sentimeter=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let analyzer = build_analyzer().await?;

    let state = Arc::new(AppState::new(analyzer));
    let app = create_router(state, &config)?;

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, origin = %config.allowed_origin, "starting server");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Pick the lexicon source from the environment: explicit file, remote
/// fetch with a one-time cache, or the bundled default.
async fn build_analyzer() -> Result<SentimentIntensityAnalyzer, sentimeter::Error> {
    if let Ok(path) = std::env::var("SENTIMETER_LEXICON_PATH") {
        tracing::info!(%path, "loading lexicon from file");
        return Ok(SentimentIntensityAnalyzer::with_lexicon(
            Lexicon::from_path(&path)?,
        ));
    }
    if let Ok(url) = std::env::var("SENTIMETER_LEXICON_URL") {
        let cache = std::env::var("SENTIMETER_LEXICON_CACHE")
            .unwrap_or_else(|_| "lexicon-cache/lexicon.txt".to_string());
        let lexicon = Lexicon::ensure_cached(&url, &cache).await?;
        return Ok(SentimentIntensityAnalyzer::with_lexicon(lexicon));
    }
    Ok(SentimentIntensityAnalyzer::new())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
