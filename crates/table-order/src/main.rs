//! # table-order
//!
//! Serves the storefront's HTTP API.
//!
//! 1. Load [`Config`] (`table-order.yaml`, `TABLE_ORDER_CONFIG`, `TABLE_ORDER__*`).
//! 2. Set up tracing.
//! 3. Start the [`Storefront`], restoring snapshots if a data directory is set.
//! 4. Serve until Ctrl+C or SIGTERM, then stop the actors.

use actor_framework::tracing::setup_tracing;
use table_order::api;
use table_order::config::{Config, LogFormat};
use table_order::lifecycle::Storefront;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    setup_tracing(&config.log.filter, config.log.format == LogFormat::Json);
    info!(?config, "Configuration loaded");

    let system = Storefront::start(&config).await?;
    let app = api::router(system.app_state());

    let address = config.server.address();
    let listener = TcpListener::bind(&address).await?;
    info!(%address, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
