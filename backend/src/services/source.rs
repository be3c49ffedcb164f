//! Weather data source seam
//!
//! The fetch layer talks to a [`WeatherSource`]. The live implementation is the
//! OpenWeatherMap client; the offline implementation is selected when no API
//! key is configured and fails every call so the fetch layer serves demo data.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use shared::{City, Coordinates, WeatherData, WeatherForecast};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;

/// Which source is serving upstream data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Live,
    Offline,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Live => "live",
            SourceKind::Offline => "offline",
        }
    }
}

/// Upstream weather data
#[async_trait]
pub trait WeatherSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    async fn current_conditions(&self, coords: Coordinates) -> AppResult<WeatherData>;

    /// Forecast samples in chronological order
    async fn forecast(&self, coords: Coordinates) -> AppResult<Vec<WeatherForecast>>;

    async fn geocode(&self, query: &str, limit: u8) -> AppResult<Vec<City>>;
}

#[async_trait]
impl WeatherSource for WeatherClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Live
    }

    async fn current_conditions(&self, coords: Coordinates) -> AppResult<WeatherData> {
        self.get_current_weather(coords).await
    }

    async fn forecast(&self, coords: Coordinates) -> AppResult<Vec<WeatherForecast>> {
        self.get_forecast(coords).await
    }

    async fn geocode(&self, query: &str, limit: u8) -> AppResult<Vec<City>> {
        WeatherClient::geocode(self, query, limit).await
    }
}

/// Source used when no API key is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

#[async_trait]
impl WeatherSource for OfflineSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Offline
    }

    async fn current_conditions(&self, _coords: Coordinates) -> AppResult<WeatherData> {
        Err(AppError::SourceNotConfigured)
    }

    async fn forecast(&self, _coords: Coordinates) -> AppResult<Vec<WeatherForecast>> {
        Err(AppError::SourceNotConfigured)
    }

    async fn geocode(&self, _query: &str, _limit: u8) -> AppResult<Vec<City>> {
        Err(AppError::SourceNotConfigured)
    }
}

/// Pick the live client when a key is configured, the offline source otherwise
pub fn source_from_config(config: &WeatherConfig) -> AppResult<Arc<dyn WeatherSource>> {
    match config.api_key() {
        Some(key) => {
            let client = WeatherClient::with_base_url(
                key.to_string(),
                config.api_endpoint.clone(),
                config.timeout(),
            )?;
            tracing::info!(endpoint = %config.api_endpoint, "Using OpenWeatherMap data source");
            Ok(Arc::new(client))
        }
        None => {
            tracing::warn!("No weather API key configured; serving demo data");
            Ok(Arc::new(OfflineSource))
        }
    }
}
