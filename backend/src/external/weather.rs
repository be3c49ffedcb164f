//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap for current conditions, forecasts and
//! direct geocoding. Successful responses are cached by time.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared::{City, Coordinates, WeatherData, WeatherForecast};

use super::cache::{TtlCache, CURRENT_TTL, DEFAULT_CAPACITY, FORECAST_TTL, GEOCODE_TTL};
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    cache: Arc<ResponseCache>,
}

struct ResponseCache {
    current: TtlCache<WeatherData>,
    forecast: TtlCache<Vec<WeatherForecast>>,
    geocode: TtlCache<Vec<City>>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self {
            current: TtlCache::new(CURRENT_TTL, DEFAULT_CAPACITY),
            forecast: TtlCache::new(FORECAST_TTL, DEFAULT_CAPACITY),
            geocode: TtlCache::new(GEOCODE_TTL, DEFAULT_CAPACITY),
        }
    }
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: OWMWind,
    clouds: OWMClouds,
    dt: i64,
    sys: Option<OWMSys>,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    feels_like: f64,
    #[serde(default)]
    temp_min: Option<f64>,
    #[serde(default)]
    temp_max: Option<f64>,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMClouds {
    all: f64,
}

#[derive(Debug, Deserialize)]
struct OWMSys {
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt: i64,
    main: OWMMain,
    weather: Vec<OWMWeather>,
}

/// One match from the direct geocoding endpoint
#[derive(Debug, Deserialize)]
struct OWMGeoMatch {
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    country: String,
}

impl WeatherClient {
    /// Create a new WeatherClient against `base_url`
    pub fn with_base_url(api_key: String, base_url: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: Arc::new(ResponseCache::default()),
        })
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn get_current_weather(&self, coords: Coordinates) -> AppResult<WeatherData> {
        let key = coords.cache_key();
        if let Some(hit) = self.cache.current.get(&key).await {
            tracing::debug!(coords = %key, "current weather cache hit");
            return Ok(hit);
        }

        let data: OWMCurrentResponse = self
            .get_json("/data/2.5/weather", &self.coordinate_query(coords))
            .await?;
        let weather = convert_current_response(data);

        self.cache.current.insert(key, weather.clone()).await;
        Ok(weather)
    }

    /// Fetch the 3-hourly forecast by GPS coordinates
    pub async fn get_forecast(&self, coords: Coordinates) -> AppResult<Vec<WeatherForecast>> {
        let key = coords.cache_key();
        if let Some(hit) = self.cache.forecast.get(&key).await {
            tracing::debug!(coords = %key, "forecast cache hit");
            return Ok(hit);
        }

        let data: OWMForecastResponse = self
            .get_json("/data/2.5/forecast", &self.coordinate_query(coords))
            .await?;
        let forecast = convert_forecast_response(data);

        self.cache.forecast.insert(key, forecast.clone()).await;
        Ok(forecast)
    }

    /// Resolve a free-text city name to at most `limit` cities
    pub async fn geocode(&self, query: &str, limit: u8) -> AppResult<Vec<City>> {
        let key = format!("{}|{}", query.trim().to_lowercase(), limit);
        if let Some(hit) = self.cache.geocode.get(&key).await {
            tracing::debug!(query, "geocode cache hit");
            return Ok(hit);
        }

        let params = [
            ("q", query.to_string()),
            ("limit", limit.to_string()),
            ("appid", self.api_key.clone()),
        ];
        let matches: Vec<OWMGeoMatch> = self.get_json("/geo/1.0/direct", &params).await?;
        let cities: Vec<City> = matches
            .into_iter()
            .map(|m| City::searched(&m.name, &m.country, m.lat, m.lon))
            .collect();

        self.cache.geocode.insert(key, cities.clone()).await;
        Ok(cities)
    }

    fn coordinate_query(&self, coords: Coordinates) -> [(&'static str, String); 4] {
        [
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ]
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("request to {} failed: {}", path, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!("{} - {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("failed to parse {} response: {}", path, e)))
    }
}

/// Convert OpenWeatherMap current response to our format
fn convert_current_response(data: OWMCurrentResponse) -> WeatherData {
    let main = data
        .weather
        .first()
        .map(|w| w.main.clone())
        .unwrap_or_default();

    WeatherData {
        dt: data.dt,
        main,
        temp: data.main.temp,
        feels_like: data.main.feels_like,
        temp_min: data.main.temp_min.unwrap_or(data.main.temp),
        temp_max: data.main.temp_max.unwrap_or(data.main.temp),
        humidity: percent(data.main.humidity),
        wind_speed: data.wind.speed,
        clouds: percent(data.clouds.all),
        sunrise: data.sys.as_ref().and_then(|s| s.sunrise),
        sunset: data.sys.as_ref().and_then(|s| s.sunset),
    }
}

/// Convert OpenWeatherMap forecast response to our format
fn convert_forecast_response(data: OWMForecastResponse) -> Vec<WeatherForecast> {
    data.list
        .into_iter()
        .map(|item| WeatherForecast {
            dt: item.dt,
            temp: item.main.temp,
            feels_like: item.main.feels_like,
            humidity: percent(item.main.humidity),
            main: item
                .weather
                .first()
                .map(|w| w.main.clone())
                .unwrap_or_default(),
        })
        .collect()
}

fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
