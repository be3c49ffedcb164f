//! HTTP handlers for the weather JSON API

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{registry_cities, City, CityWeatherDetail, DailySummary, HistoricalData, WeatherData};

use crate::error::AppResult;
use crate::AppState;

/// List the registry cities
pub async fn list_cities() -> Json<Vec<City>> {
    Json(registry_cities())
}

/// Query parameters for the city search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search cities by name
pub async fn search_cities(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<City>> {
    Json(state.weather.fetch_city_by_name(&query.q).await)
}

/// Current conditions for a registry city
pub async fn get_city_weather(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> AppResult<Json<WeatherData>> {
    let weather = state.weather.fetch_city_weather(&city_id).await?;
    Ok(Json(weather))
}

/// Current conditions and forecast for a registry or searched city
pub async fn get_city_detail(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> AppResult<Json<CityWeatherDetail>> {
    let detail = state.weather.fetch_city_weather_detail(&city_id).await?;
    Ok(Json(detail))
}

/// Thirty days of history for a city
pub async fn get_city_history(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> Json<Vec<HistoricalData>> {
    Json(state.weather.fetch_historical_weather(&city_id).await)
}

/// Seven-day summary across the registry
pub async fn get_daily_summary(State(state): State<AppState>) -> Json<Vec<DailySummary>> {
    Json(state.weather.fetch_daily_summary().await)
}
