//! Weather alert records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of weather alerts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AlertType {
    #[serde(rename = "High Temperature")]
    HighTemperature,
    #[serde(rename = "Low Temperature")]
    LowTemperature,
    #[serde(rename = "Heavy Rain")]
    HeavyRain,
    #[serde(rename = "Strong Wind")]
    StrongWind,
}

impl AlertType {
    pub const ALL: [AlertType; 4] = [
        AlertType::HighTemperature,
        AlertType::LowTemperature,
        AlertType::HeavyRain,
        AlertType::StrongWind,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AlertType::HighTemperature => "High Temperature",
            AlertType::LowTemperature => "Low Temperature",
            AlertType::HeavyRain => "Heavy Rain",
            AlertType::StrongWind => "Strong Wind",
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A raised weather alert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherAlert {
    /// City display name
    pub city: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub message: String,
    /// Unix milliseconds
    pub timestamp: i64,
}

impl WeatherAlert {
    pub fn new(city: &str, alert_type: AlertType, timestamp: i64) -> Self {
        Self {
            city: city.to_string(),
            alert_type,
            message: format!(
                "{} alert for {}. Take necessary precautions.",
                alert_type, city
            ),
            timestamp,
        }
    }

    pub fn raised_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp).unwrap_or_default()
    }
}
