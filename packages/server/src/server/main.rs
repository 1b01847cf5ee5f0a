// Main entry point for API server

use anyhow::{Context, Result};
use textsum_core::kernel::ServerDeps;
use textsum_core::server::build_app;
use textsum_core::telemetry::init_tracing;
use textsum_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration (LOG_LEVEL drives the default log filter)
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging
    init_tracing(&config);

    tracing::info!("Starting Text Summarization API");
    tracing::info!(
        env = %config.env,
        model = %config.model_name,
        default_method = %config.default_method,
        enforce_input_limit = config.enforce_input_limit,
        "Configuration loaded"
    );

    // Build application
    let server_deps = ServerDeps::from_config(&config);
    let addr = config.bind_address();
    let port = config.port;
    let app = build_app(config, server_deps);

    // Start server
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Summarization form: http://localhost:{}/", port);
    tracing::info!("Health check: http://localhost:{}/health", port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
