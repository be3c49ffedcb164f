//! HTTP handlers for weather alerts

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use shared::{AlertSettings, WeatherAlert};

use crate::error::AppResult;
use crate::AppState;

/// Currently active alerts (often empty)
pub async fn get_active_alerts(State(state): State<AppState>) -> Json<Vec<WeatherAlert>> {
    Json(state.weather.fetch_active_alerts().await)
}

/// Alerts from the past week, newest first
pub async fn get_alert_history(State(state): State<AppState>) -> Json<Vec<WeatherAlert>> {
    Json(state.weather.fetch_alert_history().await)
}

/// Validate and acknowledge alert settings
pub async fn update_alert_settings(
    State(state): State<AppState>,
    payload: Result<Json<AlertSettings>, JsonRejection>,
) -> AppResult<Json<AlertSettings>> {
    let Json(input) = payload?;
    let saved = state.settings.save_alert_settings(input).await?;
    Ok(Json(saved))
}
