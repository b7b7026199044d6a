// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::view_controller::{reap_load_task, ViewController};
use crate::domain::palette::Palette;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::source_for_location;
use crate::presentation::app_state::AppState;
use crate::presentation::chart_options::ChartOptions;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = load_app_config()?;
    let addr = config.bind_addr()?;

    // Dataset source (infrastructure layer)
    let source = source_for_location(&config.dataset.location);

    // View controller (application layer); the load runs once, in the background
    let controller = ViewController::new(source, Palette::default());
    let load = controller.spawn_load();

    let state = Arc::new(AppState {
        controller: controller.clone(),
        page: config.page.clone(),
        chart_options: ChartOptions {
            legend_position: config.page.legend,
            ..ChartOptions::default()
        },
    });

    let router = build_router(state);

    tracing::info!("Starting content-genome on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Drop any load still in flight
    controller.dispose();
    reap_load_task(load).await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
