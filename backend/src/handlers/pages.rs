//! HTML page handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use shared::{AlertSettings, SystemSettings};

use super::weather::SearchQuery;
use crate::components::forms::{parse_alert_form, parse_settings_form, FormNotice, ParsedForm};
use crate::error::AppError;
use crate::pages;
use crate::AppState;

/// Dashboard, optionally with city search results
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    Html(pages::dashboard::render(&state.weather, &state.dashboard, Some(&query.q)).await)
}

pub async fn city(State(state): State<AppState>, Path(city_id): Path<String>) -> Response {
    match pages::city::render(&state, &city_id).await {
        Ok(html) => Html(html).into_response(),
        Err(AppError::CityNotFound(id)) => not_found(&state, &format!("City \"{}\" was not found.", id)),
        Err(e) => e.into_response(),
    }
}

pub async fn alerts(State(state): State<AppState>) -> Html<String> {
    Html(pages::alerts::render(&state, &AlertSettings::default(), &FormNotice::None).await)
}

pub async fn submit_alerts(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let ParsedForm { settings, error } = parse_alert_form(&pairs);
    if let Some(error) = error {
        let html = pages::alerts::render(&state, &settings, &FormNotice::Invalid(error)).await;
        return (StatusCode::BAD_REQUEST, Html(html)).into_response();
    }

    match state.settings.save_alert_settings(settings.clone()).await {
        Ok(saved) => {
            Html(pages::alerts::render(&state, &saved, &FormNotice::Saved("Alert settings saved")).await)
                .into_response()
        }
        Err(AppError::Validation { field, message }) => {
            let notice = FormNotice::Invalid(shared::SettingsError::Invalid { field, message });
            let html = pages::alerts::render(&state, &settings, &notice).await;
            (StatusCode::BAD_REQUEST, Html(html)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn settings(State(state): State<AppState>) -> Html<String> {
    Html(pages::settings::render(
        state.weather.source_kind(),
        &SystemSettings::default(),
        &FormNotice::None,
    ))
}

pub async fn submit_settings(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let source = state.weather.source_kind();
    let ParsedForm { settings, error } = parse_settings_form(&pairs);
    if let Some(error) = error {
        let html = pages::settings::render(source, &settings, &FormNotice::Invalid(error));
        return (StatusCode::BAD_REQUEST, Html(html)).into_response();
    }

    match state.settings.save_settings(settings.clone()).await {
        Ok(saved) => Html(pages::settings::render(source, &saved, &FormNotice::Saved("Settings saved")))
            .into_response(),
        Err(AppError::Validation { field, message }) => {
            let notice = FormNotice::Invalid(shared::SettingsError::Invalid { field, message });
            (StatusCode::BAD_REQUEST, Html(pages::settings::render(source, &settings, &notice))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Fallback for unknown paths
pub async fn fallback(State(state): State<AppState>) -> Response {
    not_found(&state, "The page you were looking for does not exist.")
}

fn not_found(state: &AppState, message: &str) -> Response {
    let html = pages::not_found(state.weather.source_kind(), message);
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}
