//! Alert and system settings
//!
//! Settings are accepted from the dashboard forms and the JSON API, validated
//! at the boundary, logged, and then discarded. Nothing here is persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::REGISTRY;
use crate::types::TemperatureUnit;
use crate::validation::{
    is_registry_city, validate_email, validate_refresh_interval, validate_retention_days,
    validate_temperature_threshold,
};

/// Conditions an alert rule can watch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertCondition {
    Temperature,
    Rain,
    Snow,
    All,
}

impl AlertCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCondition::Temperature => "temperature",
            AlertCondition::Rain => "rain",
            AlertCondition::Snow => "snow",
            AlertCondition::All => "all",
        }
    }
}

impl FromStr for AlertCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "temperature" => Ok(AlertCondition::Temperature),
            "rain" => Ok(AlertCondition::Rain),
            "snow" => Ok(AlertCondition::Snow),
            "all" => Ok(AlertCondition::All),
            other => Err(format!("Unknown alert condition: {}", other)),
        }
    }
}

/// Threshold alert configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_alert_settings", skip_on_field_errors = false))]
pub struct AlertSettings {
    /// Degrees Celsius
    pub high_temp_threshold: i32,
    /// Degrees Celsius, strictly below the high threshold
    pub low_temp_threshold: i32,
    #[validate(range(min = 1, max = 5))]
    pub consecutive_readings: u8,
    pub enable_email_alerts: bool,
    #[serde(default)]
    pub email_address: String,
    #[validate(length(min = 1))]
    pub selected_cities: Vec<String>,
    #[validate(length(min = 1))]
    pub alert_conditions: Vec<AlertCondition>,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            high_temp_threshold: 35,
            low_temp_threshold: 10,
            consecutive_readings: 2,
            enable_email_alerts: false,
            email_address: String::new(),
            selected_cities: REGISTRY.iter().map(|c| c.id.to_string()).collect(),
            alert_conditions: vec![
                AlertCondition::Temperature,
                AlertCondition::Rain,
                AlertCondition::Snow,
            ],
        }
    }
}

fn validate_alert_settings(settings: &AlertSettings) -> Result<(), ValidationError> {
    if let Err(message) = validate_temperature_threshold(settings.high_temp_threshold) {
        return Err(field_error("highTempThreshold", message));
    }
    if let Err(message) = validate_temperature_threshold(settings.low_temp_threshold) {
        return Err(field_error("lowTempThreshold", message));
    }
    if settings.low_temp_threshold >= settings.high_temp_threshold {
        return Err(field_error(
            "lowTempThreshold",
            "Low temperature threshold must be below the high threshold",
        ));
    }
    if settings.enable_email_alerts {
        if let Err(message) = validate_email(&settings.email_address) {
            return Err(field_error("emailAddress", message));
        }
    }
    if let Some(unknown) = settings
        .selected_cities
        .iter()
        .find(|id| !is_registry_city(id))
    {
        let mut error = field_error("selectedCities", "Unknown city selected");
        error.add_param("city".into(), unknown);
        return Err(error);
    }
    Ok(())
}

/// Dashboard-wide preferences
#[derive(Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_system_settings", skip_on_field_errors = false))]
pub struct SystemSettings {
    #[serde(default)]
    #[validate(length(max = 128))]
    pub api_key: String,
    /// Minutes
    pub refresh_interval: u32,
    pub temperature_unit: TemperatureUnit,
    #[serde(default)]
    pub dark_mode: bool,
    pub data_retention_days: u32,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            refresh_interval: 5,
            temperature_unit: TemperatureUnit::Celsius,
            dark_mode: false,
            data_retention_days: 30,
        }
    }
}

// The API key never reaches the logs.
impl fmt::Debug for SystemSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemSettings")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("refresh_interval", &self.refresh_interval)
            .field("temperature_unit", &self.temperature_unit)
            .field("dark_mode", &self.dark_mode)
            .field("data_retention_days", &self.data_retention_days)
            .finish()
    }
}

fn validate_system_settings(settings: &SystemSettings) -> Result<(), ValidationError> {
    if let Err(message) = validate_refresh_interval(settings.refresh_interval) {
        return Err(field_error("refreshInterval", message));
    }
    if let Err(message) = validate_retention_days(settings.data_retention_days) {
        return Err(field_error("dataRetentionDays", message));
    }
    Ok(())
}

/// Schema-level errors carry the offending field name as their code
fn field_error(field: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(field);
    error.message = Some(message.into());
    error
}
