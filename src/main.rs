mod actor_framework;
mod api;
mod app_system;
mod clients;
mod config;
mod domain;
mod user_actor;

#[cfg(test)]
mod mock_framework;

use axum::extract::Request;
use axum::ServiceExt;
use clap::Parser;
use tracing::{error, info};
use crate::api::AppState;
use crate::app_system::{setup_tracing, RegistrySystem};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    let system = RegistrySystem::new(config.channel_capacity());
    let app = api::app(AppState {
        users: system.user_client.clone(),
    });

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server just runs until killed.
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
