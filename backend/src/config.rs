//! Configuration management for the Weather Monitoring Dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WXD_ prefix
//!
//! `OPENWEATHER_API_KEY` is accepted as a fallback for `weather.api_key`.

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Polling and latency settings for the dashboard views
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint, without the `/data/2.5` suffix
    pub api_endpoint: String,

    /// Weather API key. Absent or empty selects the offline source.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Delay the synthetic endpoints like a remote backend would
    pub simulate_latency: bool,

    pub card_refresh_secs: u64,
    pub detail_refresh_secs: u64,
    pub summary_refresh_secs: u64,
    pub alerts_refresh_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("WXD_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let mut builder = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", "https://api.openweathermap.org")?
            .set_default("weather.timeout_secs", 10)?
            .set_default("dashboard.simulate_latency", true)?
            .set_default("dashboard.card_refresh_secs", 300)?
            .set_default("dashboard.detail_refresh_secs", 300)?
            .set_default("dashboard.summary_refresh_secs", 1800)?
            .set_default("dashboard.alerts_refresh_secs", 300)?;

        if let Ok(key) = std::env::var("OPENWEATHER_API_KEY") {
            builder = builder.set_default("weather.api_key", key)?;
        }

        let config = builder
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WXD_ prefix)
            .add_source(
                Environment::with_prefix("WXD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl WeatherConfig {
    /// The configured key, if it is non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_endpoint", &self.api_endpoint)
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl DashboardConfig {
    pub fn card_refresh(&self) -> Duration {
        Duration::from_secs(self.card_refresh_secs)
    }

    pub fn detail_refresh(&self) -> Duration {
        Duration::from_secs(self.detail_refresh_secs)
    }

    pub fn summary_refresh(&self) -> Duration {
        Duration::from_secs(self.summary_refresh_secs)
    }

    pub fn alerts_refresh(&self) -> Duration {
        Duration::from_secs(self.alerts_refresh_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            weather: WeatherConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://api.openweathermap.org".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            card_refresh_secs: 300,
            detail_refresh_secs: 300,
            summary_refresh_secs: 1800,
            alerts_refresh_secs: 300,
        }
    }
}
