// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod tests;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::application::dashboard_service::DashboardService;
use crate::application::prediction_service::PredictionService;
use crate::application::session_store::SessionStore;
use crate::infrastructure::config::{load_app_config, load_regions_config};
use crate::infrastructure::power_client::PowerApiClient;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    create_session, export_csv, get_params, health_check, render_dashboard, request_refresh,
    save_predictions, update_params,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let app_config = load_app_config()?;
    let regions_config = load_regions_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(PowerApiClient::new(app_config.power.clone()));

    // Create services (application layer)
    let predictions = PredictionService::new(repository, regions_config);
    let dashboard = DashboardService::new(predictions);

    // Create application state
    let state = Arc::new(AppState {
        sessions: SessionStore::new(),
        dashboard,
    });

    let router = build_router(state);

    // Start server
    let addr: SocketAddr =
        format!("{}:{}", app_config.server.host, app_config.server.port).parse()?;
    tracing::info!("Starting climate-risk-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

// Router construction is separate so tests can drive it with stub services.
fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/sessions", post(create_session))
        .route("/sessions/:id/params", get(get_params).put(update_params))
        .route("/sessions/:id/refresh", post(request_refresh))
        .route("/sessions/:id/dashboard", get(render_dashboard))
        .route("/sessions/:id/export", get(export_csv))
        .route("/sessions/:id/save", post(save_predictions))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}
