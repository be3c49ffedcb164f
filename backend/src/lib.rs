//! Weather Monitoring Dashboard - Backend
//!
//! Serves the dashboard pages and a JSON API over current conditions,
//! forecasts, daily summaries, alerts and historical data for a fixed set of
//! cities plus any city found through the name search.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod components;
pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod services;

pub use config::Config;

use components::RouteRefresh;
use error::AppResult;
use pages::Dashboard;
use services::{source_from_config, SettingsService, Synthesizer, WeatherService, WeatherSource};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
    pub settings: SettingsService,
    pub refresh: RouteRefresh,
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    /// Build the state and mount the dashboard components.
    /// Must be called from within a tokio runtime.
    pub fn new(config: Config, source: Arc<dyn WeatherSource>, synth: Synthesizer) -> Self {
        let simulate_latency = config.dashboard.simulate_latency;
        let refresh = RouteRefresh::new();
        let weather = WeatherService::new(source, Arc::new(synth), simulate_latency);
        let settings = SettingsService::new(refresh.clone(), simulate_latency);
        let dashboard = Dashboard::mount(&weather, &refresh, &config.dashboard);

        Self {
            config: Arc::new(config),
            weather,
            settings,
            refresh,
            dashboard: Arc::new(dashboard),
        }
    }

    /// State backed by the source the configuration selects
    pub fn from_config(config: Config) -> AppResult<Self> {
        let source = source_from_config(&config.weather)?;
        Ok(Self::new(config, source, Synthesizer::new()))
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::page_routes())
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .fallback(handlers::pages::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
