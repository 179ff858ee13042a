//! HTTP handlers for the report API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::state::AppState;
use crate::report::{BenchmarkReport, DetailRow, ModelSummary, TaskBreakdownRow, TaskSummary};

/// Per-model drill-down: the leaderboard row plus its detail rows
#[derive(Debug, Serialize)]
pub struct ModelDetailResponse {
    pub summary: ModelSummary,
    pub details: Vec<DetailRow>,
}

/// Per-task drill-down: the difficulty row plus its breakdown rows
#[derive(Debug, Serialize)]
pub struct TaskDetailResponse {
    pub summary: TaskSummary,
    pub breakdown: Vec<TaskBreakdownRow>,
}

/// The whole report document
pub async fn api_get_report(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BenchmarkReport>, StatusCode> {
    state
        .get_report()
        .await
        .map(|loaded| Json(loaded.report))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Leaderboard rows only
pub async fn api_get_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ModelSummary>>, StatusCode> {
    state
        .get_report()
        .await
        .map(|loaded| Json(loaded.report.leaderboard))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Drill-down for one model
pub async fn api_get_model(
    State(state): State<Arc<AppState>>,
    Path(model_id): Path<String>,
) -> Result<Json<ModelDetailResponse>, StatusCode> {
    let loaded = state.get_report().await.ok_or(StatusCode::NOT_FOUND)?;

    let summary = loaded
        .report
        .leaderboard
        .iter()
        .find(|row| row.id == model_id)
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;
    let details = loaded
        .report
        .details
        .get(&model_id)
        .cloned()
        .unwrap_or_default();

    Ok(Json(ModelDetailResponse { summary, details }))
}

/// Drill-down for one task
pub async fn api_get_task(
    State(state): State<Arc<AppState>>,
    Path(task_name): Path<String>,
) -> Result<Json<TaskDetailResponse>, StatusCode> {
    let loaded = state.get_report().await.ok_or(StatusCode::NOT_FOUND)?;

    let summary = loaded
        .report
        .tasks
        .iter()
        .find(|row| row.name == task_name)
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;
    let breakdown = loaded
        .report
        .task_details
        .get(&task_name)
        .cloned()
        .unwrap_or_default();

    Ok(Json(TaskDetailResponse { summary, breakdown }))
}

/// Reload the report from disk
pub async fn api_refresh_report(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    state
        .load_report()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let loaded_at = state
        .get_report()
        .await
        .map(|loaded| loaded.loaded_at.to_rfc3339());

    Ok(Json(serde_json::json!({
        "status": "ok",
        "loaded_at": loaded_at
    })))
}

/// Health check endpoint
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "bench-report"
    }))
}
