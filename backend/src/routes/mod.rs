//! Route definitions for the Weather Monitoring Dashboard

use axum::{
    routing::{get, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cities", city_routes())
        .route("/summary/daily", get(handlers::get_daily_summary))
        .nest("/alerts", alert_routes())
        .route("/settings", put(handlers::update_settings))
}

/// City lookup and weather routes
fn city_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_cities))
        .route("/search", get(handlers::search_cities))
        .route("/:city_id/weather", get(handlers::get_city_weather))
        .route("/:city_id/detail", get(handlers::get_city_detail))
        .route("/:city_id/history", get(handlers::get_city_history))
}

/// Alert routes
fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/active", get(handlers::get_active_alerts))
        .route("/history", get(handlers::get_alert_history))
        .route("/settings", put(handlers::update_alert_settings))
}

/// Server-rendered pages
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::dashboard))
        .route("/city/:city_id", get(handlers::pages::city))
        .route(
            "/alerts",
            get(handlers::pages::alerts).post(handlers::pages::submit_alerts),
        )
        .route(
            "/settings",
            get(handlers::pages::settings).post(handlers::pages::submit_settings),
        )
}
