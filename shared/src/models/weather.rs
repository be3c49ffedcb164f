//! Weather data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::City;
use crate::types::TemperatureBand;

/// Current-conditions snapshot for one city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherData {
    /// Observation time (unix seconds)
    pub dt: i64,
    /// Condition label as reported upstream (`Clear`, `Rain`, ...)
    pub main: String,
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Relative humidity, 0-100
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Cloud coverage, 0-100
    pub clouds: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<i64>,
}

impl WeatherData {
    pub fn observed_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.dt, 0).unwrap_or_default()
    }

    pub fn band(&self) -> TemperatureBand {
        TemperatureBand::classify(self.temp)
    }
}

/// One forecast sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherForecast {
    pub dt: i64,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub main: String,
}

impl WeatherForecast {
    pub fn at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.dt, 0).unwrap_or_default()
    }
}

/// Current conditions plus forecast for a resolved city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityWeatherDetail {
    pub city: City,
    pub current: WeatherData,
    pub forecast: Vec<WeatherForecast>,
}
