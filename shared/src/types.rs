//! Common types used across the dashboard

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Stable key with four decimal places (~11 m), used for response caching
    pub fn cache_key(&self) -> String {
        format!("{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// Display unit for temperatures. Upstream data is always Celsius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius (°C)",
            TemperatureUnit::Fahrenheit => "Fahrenheit (°F)",
            TemperatureUnit::Kelvin => "Kelvin (K)",
        }
    }

    /// Rounded reading with its unit, e.g. `"24°C"`
    pub fn format(&self, celsius: f64) -> String {
        format!("{}{}", round_display(self.from_celsius(celsius)), self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
            other => Err(format!("Unknown temperature unit: {}", other)),
        }
    }
}

/// Badge shown next to a current reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Hot,
    Cold,
    Normal,
}

impl TemperatureBand {
    /// Above 35 °C is hot, below 10 °C is cold
    pub fn classify(celsius: f64) -> Self {
        if celsius > 35.0 {
            TemperatureBand::Hot
        } else if celsius < 10.0 {
            TemperatureBand::Cold
        } else {
            TemperatureBand::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBand::Hot => "Hot",
            TemperatureBand::Cold => "Cold",
            TemperatureBand::Normal => "Normal",
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Round to the nearest integer with halves going up, so `-2.5` becomes `-2`
/// and `2.5` becomes `3`, matching how browsers round chart labels.
pub fn round_display(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
