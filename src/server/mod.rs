//! HTTP scoring service.
//!
//! Axum router configuration for the batch sentiment endpoint.
//!
//! # Routes
//!
//! - `POST /analyze` - Score a batch of texts
//! - `GET /health` - Basic health check endpoint

mod handlers;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::analyzer::SentimentIntensityAnalyzer;
use crate::error::Error;

pub use handlers::ApiError;

/// Application state shared across handlers.
///
/// The analyzer is built once at startup and only ever read afterwards.
pub struct AppState {
    pub analyzer: SentimentIntensityAnalyzer,
}

impl AppState {
    pub fn new(analyzer: SentimentIntensityAnalyzer) -> Self {
        Self { analyzer }
    }
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// The single origin allowed by CORS.
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

impl ServerConfig {
    /// Build the configuration from `SENTIMETER_*` environment
    /// variables, falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, Error> {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("SENTIMETER_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("SENTIMETER_PORT") {
            config.port = port
                .parse()
                .map_err(|_| Error::Config(format!("invalid SENTIMETER_PORT: {port}")))?;
        }
        if let Ok(origin) = std::env::var("SENTIMETER_ALLOWED_ORIGIN") {
            config.allowed_origin = origin;
        }
        Ok(config)
    }

    /// Get the bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Create the application router.
///
/// CORS admits exactly the configured origin, with credentials, and
/// mirrors whatever methods and headers the client asks for (the
/// wildcard forms are not allowed alongside credentials).
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> Result<Router, Error> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|_| Error::Config(format!("invalid allowed origin: {}", config.allowed_origin)))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Ok(Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
