//! WebAssembly module for the Weather Monitoring Dashboard
//!
//! Exposes the shared display helpers to the browser:
//! - Condition icons and temperature bands
//! - Unit conversion
//! - Chart transforms over API responses
//! - Searched-city slugs

use shared::{
    forecast_chart, historical_chart, summary_chart, weather_icon as icon_for, ChartData,
    DailySummary, ForecastChartKind, HistoricalChartKind, HistoricalData, SummaryChartKind,
    TemperatureBand, TemperatureUnit, WeatherForecast,
};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("weather dashboard helpers loaded"));
}

/// Icon name for a condition label, e.g. `"rain-cloud"` for `"Rain"`
#[wasm_bindgen]
pub fn weather_icon(condition: &str) -> String {
    icon_for(condition).name().to_string()
}

/// Convert a Celsius reading to `unit` (`celsius`, `fahrenheit` or `kelvin`)
#[wasm_bindgen]
pub fn convert_temperature(celsius: f64, unit: &str) -> Result<f64, JsValue> {
    to_unit(celsius, unit).map_err(js_error)
}

/// `"Hot"`, `"Cold"` or `"Normal"`
#[wasm_bindgen]
pub fn temperature_band(celsius: f64) -> String {
    TemperatureBand::classify(celsius).label().to_string()
}

/// Chart points for a forecast array; `kind` is `daily` or `hourly`
#[wasm_bindgen]
pub fn forecast_chart_json(forecast_json: &str, kind: &str) -> Result<String, JsValue> {
    forecast_points(forecast_json, kind).map_err(js_error)
}

/// Chart points for a daily summary array; `kind` is `temperature`,
/// `conditions` or `cities`
#[wasm_bindgen]
pub fn summary_chart_json(summary_json: &str, kind: &str) -> Result<String, JsValue> {
    summary_points(summary_json, kind).map_err(js_error)
}

/// Chart points for a historical array; `kind` is `temperature`, `humidity`
/// or `conditions`
#[wasm_bindgen]
pub fn historical_chart_json(history_json: &str, kind: &str) -> Result<String, JsValue> {
    historical_points(history_json, kind).map_err(js_error)
}

/// Id of a searched city, e.g. `"new-york-us"`
#[wasm_bindgen]
pub fn city_slug(name: &str, country: &str) -> String {
    shared::city_slug(name, country)
}

fn js_error(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    js_sys::Error::new(&message).into()
}

fn to_unit(celsius: f64, unit: &str) -> Result<f64, String> {
    let unit: TemperatureUnit = unit.parse()?;
    Ok(unit.from_celsius(celsius))
}

fn forecast_points(forecast_json: &str, kind: &str) -> Result<String, String> {
    let kind: ForecastChartKind = kind.parse()?;
    let forecast: Vec<WeatherForecast> =
        serde_json::from_str(forecast_json).map_err(|e| format!("Invalid forecast JSON: {}", e))?;
    to_json(&ChartData::Forecast(forecast_chart(&forecast, kind)))
}

fn summary_points(summary_json: &str, kind: &str) -> Result<String, String> {
    let kind: SummaryChartKind = kind.parse()?;
    let summary: Vec<DailySummary> =
        serde_json::from_str(summary_json).map_err(|e| format!("Invalid summary JSON: {}", e))?;
    to_json(&summary_chart(&summary, kind))
}

fn historical_points(history_json: &str, kind: &str) -> Result<String, String> {
    let kind: HistoricalChartKind = kind.parse()?;
    let history: Vec<HistoricalData> =
        serde_json::from_str(history_json).map_err(|e| format!("Invalid historical JSON: {}", e))?;
    to_json(&historical_chart(&history, kind))
}

fn to_json(chart: &ChartData) -> Result<String, String> {
    serde_json::to_string(chart).map_err(|e| format!("Failed to serialize chart: {}", e))
}
