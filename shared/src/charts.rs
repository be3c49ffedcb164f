//! Chart transforms
//!
//! Pure conversions from the weather records into display-ready points:
//! label formatting, temperature rounding, grouping by condition label and
//! per-city pivoting. Used by the server-rendered pages and, through WASM,
//! by the browser.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::REGISTRY;
use crate::models::{DailySummary, HistoricalData, WeatherForecast};
use crate::types::round_display;

/// Hourly charts show at most this many points
pub const HOURLY_CHART_POINTS: usize = 24;

// ============================================================================
// Chart Kinds
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastChartKind {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryChartKind {
    Temperature,
    Conditions,
    Cities,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoricalChartKind {
    Temperature,
    Humidity,
    Conditions,
}

impl FromStr for ForecastChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(ForecastChartKind::Daily),
            "hourly" => Ok(ForecastChartKind::Hourly),
            other => Err(format!("Unknown forecast chart: {}", other)),
        }
    }
}

impl FromStr for SummaryChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature" => Ok(SummaryChartKind::Temperature),
            "conditions" => Ok(SummaryChartKind::Conditions),
            "cities" => Ok(SummaryChartKind::Cities),
            other => Err(format!("Unknown summary chart: {}", other)),
        }
    }
}

impl FromStr for HistoricalChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature" => Ok(HistoricalChartKind::Temperature),
            "humidity" => Ok(HistoricalChartKind::Humidity),
            "conditions" => Ok(HistoricalChartKind::Conditions),
            other => Err(format!("Unknown historical chart: {}", other)),
        }
    }
}

// ============================================================================
// Points
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    pub time: String,
    pub temp: i64,
    pub feels_like: i64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperaturePoint {
    pub date: String,
    pub avg: f64,
    pub max: f64,
    pub min: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HumidityPoint {
    pub date: String,
    pub humidity: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionCount {
    pub condition: String,
    pub count: usize,
}

/// One date with the average temperature of every registry city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CitySeriesPoint {
    pub date: String,
    /// Keyed by city id; `None` when the day has no data for that city
    #[serde(flatten)]
    pub values: BTreeMap<String, Option<f64>>,
}

/// Output of any chart transform
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ChartData {
    Forecast(Vec<ForecastPoint>),
    Temperature(Vec<TemperaturePoint>),
    Humidity(Vec<HumidityPoint>),
    Conditions(Vec<ConditionCount>),
    Cities(Vec<CitySeriesPoint>),
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            ChartData::Forecast(points) => points.len(),
            ChartData::Temperature(points) => points.len(),
            ChartData::Humidity(points) => points.len(),
            ChartData::Conditions(points) => points.len(),
            ChartData::Cities(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Label Formatting
// ============================================================================

/// `"Mar 4"`
pub fn format_day(date: &DateTime<Utc>) -> String {
    date.format("%b %-d").to_string()
}

/// `"Tue"`
pub fn format_weekday(date: &DateTime<Utc>) -> String {
    date.format("%a").to_string()
}

/// `"14:00"`
pub fn format_hour(date: &DateTime<Utc>) -> String {
    date.format("%H:%M").to_string()
}

/// `"2024-03-04 14:05:09 UTC"`
pub fn format_timestamp(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

// ============================================================================
// Transforms
// ============================================================================

/// Forecast chart points. Daily charts label by weekday; hourly charts label
/// by time and keep the first 24 samples.
pub fn forecast_chart(data: &[WeatherForecast], kind: ForecastChartKind) -> Vec<ForecastPoint> {
    let limit = match kind {
        ForecastChartKind::Daily => data.len(),
        ForecastChartKind::Hourly => HOURLY_CHART_POINTS,
    };

    data.iter()
        .take(limit)
        .map(|item| {
            let at = item.at();
            ForecastPoint {
                time: match kind {
                    ForecastChartKind::Daily => format_weekday(&at),
                    ForecastChartKind::Hourly => format_hour(&at),
                },
                temp: round_display(item.temp),
                feels_like: round_display(item.feels_like),
                humidity: item.humidity,
            }
        })
        .collect()
}

/// Count days per condition label, in first-seen order. Empty labels are skipped.
pub fn condition_counts<'a, I>(labels: I) -> Vec<ConditionCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<ConditionCount> = Vec::new();
    for label in labels.into_iter().filter(|l| !l.is_empty()) {
        match counts.iter_mut().find(|c| c.condition == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(ConditionCount {
                condition: label.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

pub fn summary_chart(data: &[DailySummary], kind: SummaryChartKind) -> ChartData {
    match kind {
        SummaryChartKind::Temperature => ChartData::Temperature(
            data.iter()
                .map(|day| TemperaturePoint {
                    date: format_day(&day.date),
                    avg: day.avg_temp,
                    max: day.max_temp,
                    min: day.min_temp,
                })
                .collect(),
        ),
        SummaryChartKind::Conditions => ChartData::Conditions(condition_counts(
            data.iter().map(|day| day.dominant_condition.as_str()),
        )),
        SummaryChartKind::Cities => ChartData::Cities(city_series(data)),
    }
}

/// Pivot the per-city aggregates into one point per day with a value per
/// registry city.
pub fn city_series(data: &[DailySummary]) -> Vec<CitySeriesPoint> {
    data.iter()
        .map(|day| {
            let values = REGISTRY
                .iter()
                .map(|city| {
                    let value = day
                        .city_data
                        .as_ref()
                        .and_then(|m| m.get(city.id))
                        .map(|agg| agg.avg_temp);
                    (city.id.to_string(), value)
                })
                .collect();
            CitySeriesPoint {
                date: format_day(&day.date),
                values,
            }
        })
        .collect()
}

pub fn historical_chart(data: &[HistoricalData], kind: HistoricalChartKind) -> ChartData {
    match kind {
        HistoricalChartKind::Temperature => ChartData::Temperature(
            data.iter()
                .map(|day| TemperaturePoint {
                    date: format_day(&day.date),
                    avg: day.avg_temp,
                    max: day.max_temp,
                    min: day.min_temp,
                })
                .collect(),
        ),
        HistoricalChartKind::Humidity => ChartData::Humidity(
            data.iter()
                .map(|day| HumidityPoint {
                    date: format_day(&day.date),
                    humidity: day.avg_humidity,
                })
                .collect(),
        ),
        HistoricalChartKind::Conditions => ChartData::Conditions(condition_counts(
            data.iter().map(|day| day.dominant_condition.as_str()),
        )),
    }
}
