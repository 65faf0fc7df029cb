//! pinrelay server binary

use std::sync::Arc;

use anyhow::Context;
use pinrelay::api::{create_app, AppState};
use pinrelay::config::AppConfig;
use pinrelay::logging::init_tracing;
use pinrelay::pinning::{create_pinning_backend, PinningBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            // Subscriber not yet configured; fall back to defaults so the failure is visible
            tracing_subscriber::fmt().init();
            tracing::error!(error = %format!("{:#}", err), "Failed to load configuration");
            return Err(err.context("failed to load configuration"));
        }
    };

    init_tracing(&config.logging)?;

    let pinning_backend = create_pinning_backend(config.pinata.to_runtime())
        .context("failed to build pinning client")?;
    let pinning: Arc<dyn PinningBackend> = Arc::from(pinning_backend);

    tracing::info!(
        api_url = %config.pinata.api_url,
        gateway_url = %config.pinata.gateway_url,
        timeout_secs = config.pinata.timeout_secs,
        allowed_origin = %config.cors.allowed_origin,
        "Pinning client initialised",
    );

    let state = AppState::new(pinning, config.pinata.gateway_url.trim());
    let router = create_app(state, &config)?;

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, error = %err, "Failed to bind listener");
            return Err(err).with_context(|| format!("failed to bind to {}", addr));
        }
    };
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
