//! HTTP handlers for system settings

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use shared::SystemSettings;

use crate::error::AppResult;
use crate::AppState;

/// Validate and acknowledge system settings
pub async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<SystemSettings>, JsonRejection>,
) -> AppResult<Json<SystemSettings>> {
    let Json(input) = payload?;
    let saved = state.settings.save_settings(input).await?;
    Ok(Json(saved))
}
