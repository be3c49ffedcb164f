//! Aggregated daily and historical records

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-city aggregate inside a [`DailySummary`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CityAggregate {
    pub avg_temp: f64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub dominant_condition: String,
}

/// One aggregated day across the monitored cities
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: DateTime<Utc>,
    pub avg_temp: f64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub dominant_condition: String,
    /// Keyed by city id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_data: Option<BTreeMap<String, CityAggregate>>,
}

/// One day of retrospective data for a single city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalData {
    pub date: DateTime<Utc>,
    pub avg_temp: f64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub avg_humidity: u8,
    pub dominant_condition: String,
}
