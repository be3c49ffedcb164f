//! Weather fetch layer
//!
//! Resolves cities against the registry (or the name search), asks the
//! configured [`WeatherSource`] for data and absorbs upstream failures with
//! synthetic records. Summary, alert and historical data are always synthetic.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use shared::{
    find_registry_city, parse_city_slug, City, CityWeatherDetail, DailySummary, HistoricalData,
    WeatherAlert, WeatherData, MIN_SEARCH_QUERY_LEN, SEARCH_RESULT_LIMIT,
};

use super::source::{SourceKind, WeatherSource};
use super::synthetic::Synthesizer;
use crate::error::{AppError, AppResult};

pub const SUMMARY_LATENCY: Duration = Duration::from_millis(1000);
pub const ACTIVE_ALERTS_LATENCY: Duration = Duration::from_millis(600);
pub const ALERT_HISTORY_LATENCY: Duration = Duration::from_millis(700);
pub const HISTORICAL_LATENCY: Duration = Duration::from_millis(900);

/// Weather service used by the components and the JSON API
#[derive(Clone)]
pub struct WeatherService {
    source: Arc<dyn WeatherSource>,
    synth: Arc<Synthesizer>,
    simulate_latency: bool,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(source: Arc<dyn WeatherSource>, synth: Arc<Synthesizer>, simulate_latency: bool) -> Self {
        Self {
            source,
            synth,
            simulate_latency,
        }
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }

    /// Current conditions for a registry city
    pub async fn fetch_city_weather(&self, city_id: &str) -> AppResult<WeatherData> {
        let city =
            find_registry_city(city_id).ok_or_else(|| AppError::CityNotFound(city_id.to_string()))?;
        Ok(self.current_for(&city).await)
    }

    /// Cities matching a free-text name. Short queries and upstream failures
    /// both yield an empty list.
    pub async fn fetch_city_by_name(&self, query: &str) -> Vec<City> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_QUERY_LEN {
            return Vec::new();
        }

        match self.source.geocode(query, SEARCH_RESULT_LIMIT).await {
            Ok(cities) => cities,
            Err(e) => {
                self.log_fallback("city search", query, &e);
                Vec::new()
            }
        }
    }

    /// Resolve a registry id or a searched-city slug such as `"paris-fr"`
    pub async fn resolve_city(&self, city_id: &str) -> AppResult<City> {
        if let Some(city) = find_registry_city(city_id) {
            return Ok(city);
        }

        let not_found = || AppError::CityNotFound(city_id.to_string());
        let parts = parse_city_slug(city_id).ok_or_else(not_found)?;

        self.fetch_city_by_name(&parts.query)
            .await
            .into_iter()
            .find(|city| {
                city.country
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(&parts.country))
            })
            .ok_or_else(not_found)
    }

    /// Current conditions and forecast for a registry or searched city
    pub async fn fetch_city_weather_detail(&self, city_id: &str) -> AppResult<CityWeatherDetail> {
        let city = self.resolve_city(city_id).await?;
        let current = self.current_for(&city).await;

        let forecast = match self.source.forecast(city.coordinates()).await {
            Ok(forecast) => forecast,
            Err(e) => {
                self.log_fallback("forecast", &city.name, &e);
                self.synth.hourly_forecast(&current, Utc::now())
            }
        };

        Ok(CityWeatherDetail {
            city,
            current,
            forecast,
        })
    }

    /// The last seven days, oldest first
    pub async fn fetch_daily_summary(&self) -> Vec<DailySummary> {
        self.delay(SUMMARY_LATENCY).await;
        self.synth.daily_summaries(Utc::now())
    }

    pub async fn fetch_active_alerts(&self) -> Vec<WeatherAlert> {
        self.delay(ACTIVE_ALERTS_LATENCY).await;
        self.synth.active_alerts(Utc::now())
    }

    /// Past alerts, newest first
    pub async fn fetch_alert_history(&self) -> Vec<WeatherAlert> {
        self.delay(ALERT_HISTORY_LATENCY).await;
        self.synth.alert_history(Utc::now())
    }

    /// Thirty days of history, oldest first. Any id is accepted.
    pub async fn fetch_historical_weather(&self, city_id: &str) -> Vec<HistoricalData> {
        self.delay(HISTORICAL_LATENCY).await;
        tracing::debug!(city_id, "Generating historical weather");
        self.synth.historical(Utc::now())
    }

    async fn current_for(&self, city: &City) -> WeatherData {
        match self.source.current_conditions(city.coordinates()).await {
            Ok(weather) => weather,
            Err(e) => {
                self.log_fallback("current weather", &city.name, &e);
                self.synth.current_conditions(Utc::now())
            }
        }
    }

    async fn delay(&self, latency: Duration) {
        if self.simulate_latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn log_fallback(&self, what: &str, subject: &str, error: &AppError) {
        match error {
            AppError::SourceNotConfigured => {
                tracing::debug!("Serving demo {} for {}", what, subject)
            }
            e if e.is_transient() => {
                tracing::error!("Error fetching {} for {}: {}", what, subject, e)
            }
            e => tracing::warn!("Unexpected {} failure for {}: {}", what, subject, e),
        }
    }
}
