//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::ServerDeps;
use crate::server::routes::{evaluate_handler, health_handler, summarize_handler};
use crate::server::static_files::{serve_asset, serve_index};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    /// Resolved once at startup, read-only afterwards
    pub config: Arc<Config>,
    pub server_deps: Arc<ServerDeps>,
}

impl AxumAppState {
    pub fn new(config: Config, server_deps: ServerDeps) -> Self {
        Self {
            config: Arc::new(config),
            server_deps: Arc::new(server_deps),
        }
    }
}

/// Build the Axum application router
pub fn build_app(config: Config, server_deps: ServerDeps) -> Router {
    let app_state = AxumAppState::new(config, server_deps);

    // CORS configuration - the form may be served from another origin in development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/summarize", post(summarize_handler))
        .route("/evaluate", post(evaluate_handler))
        // Interactive form
        .route("/", get(serve_index))
        .route("/static/*path", get(serve_asset))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
