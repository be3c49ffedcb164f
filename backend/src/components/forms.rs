//! Alert configuration and system settings forms
//!
//! Forms post `application/x-www-form-urlencoded` bodies with repeated keys
//! for the checkbox groups, so they are read as raw pairs and converted here.

use std::fmt::Write;
use std::str::FromStr;

use shared::{
    AlertCondition, AlertSettings, SettingsError, SystemSettings, TemperatureUnit, REFRESH_INTERVAL_OPTIONS,
    REGISTRY, RETENTION_DAY_OPTIONS,
};

use super::html::escape;

/// Outcome message shown above a form
#[derive(Debug, Clone, PartialEq)]
pub enum FormNotice {
    None,
    Saved(&'static str),
    Invalid(SettingsError),
}

impl FormNotice {
    fn render(&self) -> String {
        match self {
            FormNotice::None => String::new(),
            FormNotice::Saved(message) => {
                format!(r#"<div class="notice notice-success" role="status">{}</div>"#, escape(message))
            }
            FormNotice::Invalid(error) => format!(
                r#"<div class="notice notice-error" role="alert" data-field="{}">{}</div>"#,
                escape(error.field()),
                escape(error.message())
            ),
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

fn values<'a>(pairs: &'a [(String, String)], key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    pairs
        .iter()
        .filter(move |(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn value<'a>(pairs: &'a [(String, String)], key: &'a str) -> Option<&'a str> {
    values(pairs, key).next()
}

fn checked(pairs: &[(String, String)], key: &str) -> bool {
    value(pairs, key).is_some_and(|v| matches!(v, "on" | "true" | "1"))
}

fn number<T: FromStr>(pairs: &[(String, String)], key: &str, field: &str) -> Result<T, SettingsError> {
    let raw = value(pairs, key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| SettingsError::invalid(field, "This field is required"))?;
    raw.parse()
        .map_err(|_| SettingsError::invalid(field, format!("\"{}\" is not a valid number", raw)))
}

/// Settings read from a submitted form, plus the first field that failed.
///
/// Fields that fail to parse fall back to their defaults so the form can be
/// re-rendered with everything else the user entered.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedForm<T> {
    pub settings: T,
    pub error: Option<SettingsError>,
}

#[derive(Default)]
struct FirstError(Option<SettingsError>);

impl FirstError {
    fn or<T>(&mut self, result: Result<T, SettingsError>, fallback: T) -> T {
        result.unwrap_or_else(|error| {
            self.0.get_or_insert(error);
            fallback
        })
    }
}

/// Build alert settings from a submitted form
pub fn parse_alert_form(pairs: &[(String, String)]) -> ParsedForm<AlertSettings> {
    let defaults = AlertSettings::default();
    let mut first = FirstError::default();

    let high_temp_threshold = first.or(
        number(pairs, "high_temp_threshold", "highTempThreshold"),
        defaults.high_temp_threshold,
    );
    let low_temp_threshold = first.or(
        number(pairs, "low_temp_threshold", "lowTempThreshold"),
        defaults.low_temp_threshold,
    );
    let consecutive_readings = first.or(
        number(pairs, "consecutive_readings", "consecutiveReadings"),
        defaults.consecutive_readings,
    );

    let mut alert_conditions = Vec::new();
    for raw in values(pairs, "alert_conditions") {
        match raw.parse::<AlertCondition>() {
            Ok(condition) => alert_conditions.push(condition),
            Err(message) => {
                first.0.get_or_insert(SettingsError::invalid("alertConditions", message));
            }
        }
    }

    ParsedForm {
        settings: AlertSettings {
            high_temp_threshold,
            low_temp_threshold,
            consecutive_readings,
            enable_email_alerts: checked(pairs, "enable_email_alerts"),
            email_address: value(pairs, "email_address").unwrap_or_default().trim().to_string(),
            selected_cities: values(pairs, "selected_cities").map(str::to_string).collect(),
            alert_conditions,
        },
        error: first.0,
    }
}

/// Build system settings from a submitted form
pub fn parse_settings_form(pairs: &[(String, String)]) -> ParsedForm<SystemSettings> {
    let defaults = SystemSettings::default();
    let mut first = FirstError::default();

    let refresh_interval = first.or(
        number(pairs, "refresh_interval", "refreshInterval"),
        defaults.refresh_interval,
    );
    let temperature_unit = first.or(
        value(pairs, "temperature_unit")
            .unwrap_or("celsius")
            .parse::<TemperatureUnit>()
            .map_err(|message| SettingsError::invalid("temperatureUnit", message)),
        defaults.temperature_unit,
    );
    let data_retention_days = first.or(
        number(pairs, "data_retention_days", "dataRetentionDays"),
        defaults.data_retention_days,
    );

    ParsedForm {
        settings: SystemSettings {
            api_key: value(pairs, "api_key").unwrap_or_default().trim().to_string(),
            refresh_interval,
            temperature_unit,
            dark_mode: checked(pairs, "dark_mode"),
            data_retention_days,
        },
        error: first.0,
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn checkbox(name: &str, value: &str, label: &str, is_checked: bool) -> String {
    format!(
        r#"<label class="checkbox"><input type="checkbox" name="{}" value="{}"{}> {}</label>"#,
        name,
        escape(value),
        if is_checked { " checked" } else { "" },
        escape(label)
    )
}

fn options<T: PartialEq + Copy>(items: &[T], selected: T, label: impl Fn(T) -> (String, String)) -> String {
    let mut html = String::new();
    for item in items.iter().copied() {
        let (value, text) = label(item);
        let _ = write!(
            html,
            r#"<option value="{}"{}>{}</option>"#,
            escape(&value),
            if item == selected { " selected" } else { "" },
            escape(&text)
        );
    }
    html
}

pub fn alert_settings_form(settings: &AlertSettings, notice: &FormNotice) -> String {
    let mut cities = String::new();
    for city in REGISTRY.iter() {
        let is_checked = settings.selected_cities.iter().any(|id| id == city.id);
        cities.push_str(&checkbox("selected_cities", city.id, city.name, is_checked));
    }

    let mut conditions = String::new();
    for (condition, label) in [
        (AlertCondition::Temperature, "Temperature thresholds"),
        (AlertCondition::Rain, "Heavy rain"),
        (AlertCondition::Snow, "Snow"),
        (AlertCondition::All, "All conditions"),
    ] {
        let is_checked = settings.alert_conditions.contains(&condition);
        conditions.push_str(&checkbox("alert_conditions", condition.as_str(), label, is_checked));
    }

    let readings: Vec<u8> = (1..=5).collect();

    format!(
        concat!(
            r#"<form class="card settings-form" method="post" action="/alerts">"#,
            r#"<h2>Alert Configuration</h2>{notice}"#,
            r#"<fieldset><legend>Temperature thresholds</legend>"#,
            r#"<label>High temperature (°C) <input type="number" name="high_temp_threshold" min="-50" max="60" value="{high}"></label>"#,
            r#"<label>Low temperature (°C) <input type="number" name="low_temp_threshold" min="-50" max="60" value="{low}"></label>"#,
            r#"<label>Consecutive readings <select name="consecutive_readings">{readings}</select></label>"#,
            r#"</fieldset>"#,
            r#"<fieldset><legend>Notifications</legend>{email_toggle}"#,
            r#"<label>Email address <input type="email" name="email_address" value="{email}"></label></fieldset>"#,
            r#"<fieldset><legend>Cities</legend>{cities}</fieldset>"#,
            r#"<fieldset><legend>Alert conditions</legend>{conditions}</fieldset>"#,
            r#"<button type="submit">Save alert settings</button></form>"#,
        ),
        notice = notice.render(),
        high = settings.high_temp_threshold,
        low = settings.low_temp_threshold,
        readings = options(&readings, settings.consecutive_readings, |n| (n.to_string(), n.to_string())),
        email_toggle = checkbox("enable_email_alerts", "on", "Send email alerts", settings.enable_email_alerts),
        email = escape(&settings.email_address),
        cities = cities,
        conditions = conditions,
    )
}

pub fn system_settings_form(settings: &SystemSettings, notice: &FormNotice) -> String {
    format!(
        concat!(
            r#"<form class="card settings-form" method="post" action="/settings">"#,
            r#"<h2>System Settings</h2>{notice}"#,
            r#"<label>OpenWeatherMap API key <input type="password" name="api_key" autocomplete="off" value="{api_key}"></label>"#,
            r#"<label>Refresh interval <select name="refresh_interval">{intervals}</select></label>"#,
            r#"<label>Temperature unit <select name="temperature_unit">{units}</select></label>"#,
            r#"{dark_mode}"#,
            r#"<label>Data retention <select name="data_retention_days">{retention}</select></label>"#,
            r#"<button type="submit">Save settings</button></form>"#,
        ),
        notice = notice.render(),
        api_key = escape(&settings.api_key),
        intervals = options(&REFRESH_INTERVAL_OPTIONS, settings.refresh_interval, |m| {
            (m.to_string(), format!("{} minute{}", m, if m == 1 { "" } else { "s" }))
        }),
        units = options(&TemperatureUnit::ALL, settings.temperature_unit, |u| {
            (u.as_str().to_string(), u.label().to_string())
        }),
        dark_mode = checkbox("dark_mode", "on", "Dark mode", settings.dark_mode),
        retention = options(&RETENTION_DAY_OPTIONS, settings.data_retention_days, |d| {
            (d.to_string(), format!("{} days", d))
        }),
    )
}
