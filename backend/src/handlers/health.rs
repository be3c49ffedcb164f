//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::services::SourceKind;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub data_source: SourceKind,
    pub dashboard: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dashboard = if state.dashboard.is_running() {
        "running".to_string()
    } else {
        "stopped".to_string()
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_source: state.weather.source_kind(),
        dashboard,
    })
}
