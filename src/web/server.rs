//! Report API server setup and routing

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::handlers;
use super::state::AppState;

/// Start the report API server
pub async fn start_server(port: u16, report_path: PathBuf) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(report_path));

    // Load the report up front; the refresh endpoint can retry later
    if let Err(e) = state.load_report().await {
        tracing::warn!("Failed to load initial report: {}", e);
    }

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/report", get(handlers::api_get_report))
        .route("/api/report/refresh", post(handlers::api_refresh_report))
        .route("/api/leaderboard", get(handlers::api_get_leaderboard))
        .route("/api/models/:model_id", get(handlers::api_get_model))
        .route("/api/tasks/:task_name", get(handlers::api_get_task))
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting report API server on http://localhost:{}", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
