// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::application::dashboard_service::DashboardService;
use crate::application::sales_source::SalesDataSource;
use crate::infrastructure::config::load_server_config;
use crate::infrastructure::json_source::JsonSalesSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, show_dashboard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_server_config()?;

    // Load the dataset once; it stays immutable for the life of the process
    let source: Arc<dyn SalesDataSource> = Arc::new(JsonSalesSource::new(&config.dataset.path));
    let dataset = source.load().await?;
    tracing::info!(
        "loaded {} monthly records from {}",
        dataset.len(),
        config.dataset.path
    );

    // Create service (application layer)
    let dashboard_service = DashboardService::new(config.page.title.clone(), dataset);

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(show_dashboard))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.listen.parse()?;
    tracing::info!("starting lanchonete-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
