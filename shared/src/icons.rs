//! Weather condition to icon mapping

use serde::{Deserialize, Serialize};

/// Icons available to the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Sun,
    Cloud,
    RainCloud,
    DrizzleCloud,
    LightningCloud,
    SnowCloud,
    FogCloud,
}

impl WeatherIcon {
    pub fn name(&self) -> &'static str {
        match self {
            WeatherIcon::Sun => "sun",
            WeatherIcon::Cloud => "cloud",
            WeatherIcon::RainCloud => "rain-cloud",
            WeatherIcon::DrizzleCloud => "drizzle-cloud",
            WeatherIcon::LightningCloud => "lightning-cloud",
            WeatherIcon::SnowCloud => "snow-cloud",
            WeatherIcon::FogCloud => "fog-cloud",
        }
    }

    /// Glyph used by the server-rendered pages
    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherIcon::Sun => "☀",
            WeatherIcon::Cloud => "☁",
            WeatherIcon::RainCloud => "🌧",
            WeatherIcon::DrizzleCloud => "🌦",
            WeatherIcon::LightningCloud => "⛈",
            WeatherIcon::SnowCloud => "🌨",
            WeatherIcon::FogCloud => "🌫",
        }
    }
}

/// Map a condition label to its icon, ignoring case. Unknown labels get a cloud.
pub fn weather_icon(condition: &str) -> WeatherIcon {
    match condition.to_lowercase().as_str() {
        "clear" => WeatherIcon::Sun,
        "clouds" => WeatherIcon::Cloud,
        "rain" => WeatherIcon::RainCloud,
        "drizzle" => WeatherIcon::DrizzleCloud,
        "thunderstorm" => WeatherIcon::LightningCloud,
        "snow" => WeatherIcon::SnowCloud,
        "mist" | "fog" => WeatherIcon::FogCloud,
        _ => WeatherIcon::Cloud,
    }
}
