//! Weather fetch layer tests
//!
//! Tests for the fetch layer including:
//! - Fallback data when the upstream fails
//! - City search and searched-city resolution
//! - Alert feeds and historical series

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use proptest::prelude::*;
use shared::{City, Coordinates, WeatherData, WeatherForecast, FALLBACK_CONDITIONS};
use weather_dashboard::error::{AppError, AppResult};
use weather_dashboard::services::{
    OfflineSource, SourceKind, Synthesizer, WeatherService, WeatherSource,
};

// ============================================================================
// Test Sources
// ============================================================================

/// Upstream that fails every call and counts what was attempted
#[derive(Default)]
struct FailingSource {
    current_calls: AtomicUsize,
    geocode_calls: AtomicUsize,
}

#[async_trait]
impl WeatherSource for FailingSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Live
    }

    async fn current_conditions(&self, _coords: Coordinates) -> AppResult<WeatherData> {
        self.current_calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::Upstream("503 Service Unavailable".to_string()))
    }

    async fn forecast(&self, _coords: Coordinates) -> AppResult<Vec<WeatherForecast>> {
        Err(AppError::Upstream("503 Service Unavailable".to_string()))
    }

    async fn geocode(&self, _query: &str, _limit: u8) -> AppResult<Vec<City>> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::Upstream("503 Service Unavailable".to_string()))
    }
}

/// Upstream with a fixed geocoder and a reading that echoes the coordinates
struct FixedSource {
    matches: Vec<City>,
    queries: std::sync::Mutex<Vec<String>>,
}

impl FixedSource {
    fn new(matches: Vec<City>) -> Self {
        Self {
            matches,
            queries: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WeatherSource for FixedSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Live
    }

    async fn current_conditions(&self, coords: Coordinates) -> AppResult<WeatherData> {
        Ok(WeatherData {
            dt: 1_700_000_000,
            main: "Clear".to_string(),
            // Encode the latitude so tests can see which coordinates were used
            temp: coords.latitude,
            feels_like: coords.longitude,
            temp_min: 10.0,
            temp_max: 20.0,
            humidity: 50,
            wind_speed: 1.0,
            clouds: 0,
            sunrise: None,
            sunset: None,
        })
    }

    async fn forecast(&self, _coords: Coordinates) -> AppResult<Vec<WeatherForecast>> {
        Ok(vec![WeatherForecast {
            dt: 1_700_003_600,
            temp: 12.0,
            feels_like: 11.0,
            humidity: 55,
            main: "Clouds".to_string(),
        }])
    }

    async fn geocode(&self, query: &str, _limit: u8) -> AppResult<Vec<City>> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.matches.clone())
    }
}

fn service(source: Arc<dyn WeatherSource>) -> WeatherService {
    WeatherService::new(source, Arc::new(Synthesizer::seeded(2024)), false)
}

fn paris_matches() -> Vec<City> {
    vec![
        City::searched("Paris", "US", 33.66, -95.55),
        City::searched("Paris", "FR", 48.8566, 2.3522),
    ]
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Registry city with a failing upstream falls back to synthetic data
    #[tokio::test]
    async fn test_fallback_reading_for_registry_city() {
        let source = Arc::new(FailingSource::default());
        let weather = service(source.clone());

        for _ in 0..50 {
            let reading = weather.fetch_city_weather("delhi").await.unwrap();
            assert!((30..100).contains(&reading.humidity));
            assert!(reading.clouds < 100);
            assert!(FALLBACK_CONDITIONS.contains(&reading.main.as_str()));
        }
        assert_eq!(source.current_calls.load(Ordering::SeqCst), 50);
    }

    #[tokio::test]
    async fn test_unknown_registry_city_is_not_found() {
        let weather = service(Arc::new(FailingSource::default()));
        let result = weather.fetch_city_weather("paris-fr").await;
        assert!(matches!(result, Err(AppError::CityNotFound(id)) if id == "paris-fr"));
    }

    #[tokio::test]
    async fn test_short_query_makes_no_network_call() {
        let source = Arc::new(FailingSource::default());
        let weather = service(source.clone());

        assert!(weather.fetch_city_by_name("a").await.is_empty());
        assert!(weather.fetch_city_by_name(" ").await.is_empty());
        assert_eq!(source.geocode_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_failure_yields_empty_list() {
        let source = Arc::new(FailingSource::default());
        let weather = service(source.clone());

        assert!(weather.fetch_city_by_name("paris").await.is_empty());
        assert_eq!(source.geocode_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_searched_city_resolves_by_country() {
        let source = Arc::new(FixedSource::new(paris_matches()));
        let weather = service(source.clone());

        let detail = weather.fetch_city_weather_detail("paris-fr").await.unwrap();
        assert_eq!(detail.city.country.as_deref(), Some("FR"));
        assert_eq!(detail.city.id, "paris-fr");
        // Current conditions come from the resolved city's coordinates
        assert_eq!(detail.current.temp, 48.8566);
        assert_eq!(detail.forecast.len(), 1);
        assert_eq!(source.queries.lock().unwrap().as_slice(), ["paris"]);
    }

    #[tokio::test]
    async fn test_multi_word_slug_searches_with_spaces() {
        let source = Arc::new(FixedSource::new(vec![City::searched("New York", "US", 40.71, -74.0)]));
        let weather = service(source.clone());

        let city = weather.resolve_city("new-york-us").await.unwrap();
        assert_eq!(city.name, "New York");
        assert_eq!(source.queries.lock().unwrap().as_slice(), ["new york"]);
    }

    #[tokio::test]
    async fn test_searched_city_without_country_match_is_not_found() {
        let weather = service(Arc::new(FixedSource::new(paris_matches())));
        let result = weather.fetch_city_weather_detail("paris-de").await;
        assert!(matches!(result, Err(AppError::CityNotFound(_))));
    }

    #[tokio::test]
    async fn test_search_error_resolves_to_not_found() {
        let weather = service(Arc::new(FailingSource::default()));
        let result = weather.fetch_city_weather_detail("paris-fr").await;
        assert!(matches!(result, Err(AppError::CityNotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_slug_is_not_found() {
        let source = Arc::new(FixedSource::new(paris_matches()));
        let weather = service(source.clone());

        assert!(weather.resolve_city("atlantis").await.is_err());
        assert!(weather.resolve_city("-fr").await.is_err());
        assert!(source.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_forecast_fallback_has_48_hourly_points() {
        let weather = service(Arc::new(FailingSource::default()));
        let detail = weather.fetch_city_weather_detail("mumbai").await.unwrap();

        assert_eq!(detail.forecast.len(), 48);
        assert!(detail
            .forecast
            .windows(2)
            .all(|w| w[1].dt - w[0].dt == 3600));
        assert!(detail.forecast.iter().all(|f| f.humidity <= 100));
    }

    #[tokio::test]
    async fn test_offline_source_serves_demo_data() {
        let weather = service(Arc::new(OfflineSource));
        assert_eq!(weather.source_kind(), SourceKind::Offline);

        let reading = weather.fetch_city_weather("kolkata").await.unwrap();
        assert!(FALLBACK_CONDITIONS.contains(&reading.main.as_str()));
        assert!(weather.fetch_city_by_name("london").await.is_empty());
    }

    #[tokio::test]
    async fn test_alert_history_sorted_and_sized() {
        let weather = service(Arc::new(OfflineSource));
        for _ in 0..25 {
            let alerts = weather.fetch_alert_history().await;
            assert!((5..=10).contains(&alerts.len()));
            assert!(alerts.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        }
    }

    #[tokio::test]
    async fn test_active_alerts_mostly_empty() {
        let weather = service(Arc::new(OfflineSource));
        let trials = 2000;
        let mut empty = 0;
        for _ in 0..trials {
            let alerts = weather.fetch_active_alerts().await;
            if alerts.is_empty() {
                empty += 1;
            } else {
                assert!(alerts.len() <= 3);
            }
        }
        let ratio = empty as f64 / trials as f64;
        assert!((0.65..0.75).contains(&ratio), "empty ratio {}", ratio);
    }

    #[tokio::test]
    async fn test_historical_series_has_30_increasing_dates() {
        let weather = service(Arc::new(OfflineSource));
        let data = weather.fetch_historical_weather("bangalore").await;

        assert_eq!(data.len(), 30);
        assert!(data.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[tokio::test]
    async fn test_daily_summary_covers_registry() {
        let weather = service(Arc::new(OfflineSource));
        let summaries = weather.fetch_daily_summary().await;

        assert_eq!(summaries.len(), 7);
        for day in summaries {
            let cities = day.city_data.unwrap();
            assert!(cities.contains_key("delhi"));
            assert!(cities.contains_key("hyderabad"));
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Queries under two characters never reach the geocoder
        #[test]
        fn prop_short_queries_skip_geocoder(query in "\\PC?") {
            let source = Arc::new(FailingSource::default());
            let weather = service(source.clone());

            let result = runtime().block_on(weather.fetch_city_by_name(&query));
            prop_assert!(result.is_empty());
            prop_assert_eq!(source.geocode_calls.load(Ordering::SeqCst), 0);
        }

        /// Ids that are neither registry ids nor slugs never resolve
        #[test]
        fn prop_ids_without_hyphen_are_not_found(id in "[a-z]{1,12}") {
            prop_assume!(shared::find_registry_city(&id).is_none());
            let weather = service(Arc::new(FixedSource::new(paris_matches())));

            let result = runtime().block_on(weather.resolve_city(&id));
            prop_assert!(matches!(result, Err(AppError::CityNotFound(_))));
        }
    }
}
