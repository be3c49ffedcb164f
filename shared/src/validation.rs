//! Validation utilities for the Weather Monitoring Dashboard
//!
//! Field-level checks used by the settings models, plus helpers for turning
//! `validator` errors into a single user-facing message.

use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::constants::REGISTRY;

/// Refresh intervals offered by the settings form (minutes)
pub const REFRESH_INTERVAL_OPTIONS: [u32; 6] = [1, 5, 10, 15, 30, 60];

/// Retention periods offered by the settings form (days)
pub const RETENTION_DAY_OPTIONS: [u32; 5] = [7, 14, 30, 60, 90];

/// Accepted alert threshold range (°C)
pub const THRESHOLD_RANGE: std::ops::RangeInclusive<i32> = -50..=60;

// ============================================================================
// Settings Validations
// ============================================================================

/// Validate an alert temperature threshold
pub fn validate_temperature_threshold(celsius: i32) -> Result<(), &'static str> {
    if !THRESHOLD_RANGE.contains(&celsius) {
        return Err("Temperature threshold must be between -50 and 60 °C");
    }
    Ok(())
}

/// Validate the dashboard refresh interval
pub fn validate_refresh_interval(minutes: u32) -> Result<(), &'static str> {
    if !REFRESH_INTERVAL_OPTIONS.contains(&minutes) {
        return Err("Refresh interval must be one of 1, 5, 10, 15, 30 or 60 minutes");
    }
    Ok(())
}

/// Validate the data retention period
pub fn validate_retention_days(days: u32) -> Result<(), &'static str> {
    if !RETENTION_DAY_OPTIONS.contains(&days) {
        return Err("Data retention must be one of 7, 14, 30, 60 or 90 days");
    }
    Ok(())
}

/// Validate a notification address
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if validator::validate_email(email) {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

pub fn is_registry_city(id: &str) -> bool {
    REGISTRY.iter().any(|c| c.id == id)
}

// ============================================================================
// Error Reporting
// ============================================================================

/// A rejected settings payload, reduced to the first offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("{field}: {message}")]
    Invalid { field: String, message: String },
}

impl SettingsError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        SettingsError::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            SettingsError::Invalid { field, .. } => field,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SettingsError::Invalid { message, .. } => message,
        }
    }
}

impl From<ValidationErrors> for SettingsError {
    fn from(errors: ValidationErrors) -> Self {
        let (field, message) = first_violation(&errors);
        SettingsError::Invalid { field, message }
    }
}

/// Run the derived and schema validations of a settings struct
pub fn check_settings<T: Validate>(settings: &T) -> Result<(), SettingsError> {
    settings.validate().map_err(SettingsError::from)
}

/// Pick one violation to report, as `(field, message)`.
///
/// Field names come back in camelCase to match the JSON payloads. Schema-level
/// errors carry their field name in the error code.
pub fn first_violation(errors: &ValidationErrors) -> (String, String) {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(name, _)| *name);

    for (name, list) in fields {
        if let Some(error) = list.first() {
            let field = if name == "__all__" {
                error.code.to_string()
            } else {
                snake_to_camel(name)
            };
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            return (field, message);
        }
    }

    ("settings".to_string(), "Invalid settings".to_string())
}

fn snake_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_temperature_threshold() {
        assert!(validate_temperature_threshold(35).is_ok());
        assert!(validate_temperature_threshold(-50).is_ok());
        assert!(validate_temperature_threshold(60).is_ok());
        assert!(validate_temperature_threshold(61).is_err());
        assert!(validate_temperature_threshold(-51).is_err());
    }

    #[test]
    fn test_validate_refresh_interval() {
        for minutes in REFRESH_INTERVAL_OPTIONS {
            assert!(validate_refresh_interval(minutes).is_ok());
        }
        assert!(validate_refresh_interval(0).is_err());
        assert!(validate_refresh_interval(20).is_err());
    }

    #[test]
    fn test_validate_retention_days() {
        for days in RETENTION_DAY_OPTIONS {
            assert!(validate_retention_days(days).is_ok());
        }
        assert!(validate_retention_days(365).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alerts@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
    }

    #[test]
    fn test_is_registry_city() {
        assert!(is_registry_city("mumbai"));
        assert!(!is_registry_city("paris-fr"));
    }

    #[test]
    fn test_check_settings_reports_first_field() {
        let settings = crate::models::AlertSettings {
            consecutive_readings: 9,
            ..Default::default()
        };
        let error = check_settings(&settings).unwrap_err();
        assert_eq!(error.field(), "consecutiveReadings");
        assert!(check_settings(&crate::models::SystemSettings::default()).is_ok());
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("consecutive_readings"), "consecutiveReadings");
        assert_eq!(snake_to_camel("api_key"), "apiKey");
        assert_eq!(snake_to_camel("plain"), "plain");
    }
}
