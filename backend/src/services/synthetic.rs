//! Synthetic weather data
//!
//! Randomized stand-ins for upstream data: the fallback current reading and
//! forecast, plus the daily summaries, alerts and historical series that have
//! no upstream at all. Every generator takes the reference time explicitly.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use shared::{
    AlertType, CityAggregate, DailySummary, HistoricalData, WeatherAlert, WeatherData,
    WeatherForecast, FALLBACK_CONDITIONS, FORECAST_CONDITIONS, REGISTRY,
};

/// Hourly samples in a fallback forecast
pub const FALLBACK_FORECAST_HOURS: i64 = 48;

/// Days covered by the daily summary
pub const SUMMARY_DAYS: i64 = 7;

/// Days covered by the historical series
pub const HISTORY_DAYS: i64 = 30;

/// Probability that the active-alert feed comes back empty
pub const NO_ACTIVE_ALERTS_PROBABILITY: f64 = 0.7;

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Seedable random generator shared by the fetch layer
pub struct Synthesizer {
    rng: Mutex<StdRng>,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator for tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Randomized current conditions used when the upstream call fails
    pub fn current_conditions(&self, now: DateTime<Utc>) -> WeatherData {
        let mut rng = self.rng();
        let ts = now.timestamp();

        WeatherData {
            dt: ts,
            main: pick(&mut *rng, &FALLBACK_CONDITIONS),
            temp: 15.0 + rng.gen_range(0.0..20.0),
            feels_like: 14.0 + rng.gen_range(0.0..20.0),
            temp_min: 14.0 + rng.gen_range(0.0..10.0),
            temp_max: 20.0 + rng.gen_range(0.0..10.0),
            humidity: 30 + rng.gen_range(0..60u8),
            wind_speed: 2.0 + rng.gen_range(0.0..8.0),
            clouds: rng.gen_range(0..100u8),
            sunrise: Some(ts - 6 * 3600),
            sunset: Some(ts + 6 * 3600),
        }
    }

    /// Hourly forecast for the next 48 hours, perturbed around `current`
    pub fn hourly_forecast(&self, current: &WeatherData, now: DateTime<Utc>) -> Vec<WeatherForecast> {
        let mut rng = self.rng();
        let ts = now.timestamp();

        (1..=FALLBACK_FORECAST_HOURS)
            .map(|i| {
                let humidity = i32::from(current.humidity) + rng.gen_range(-10..10);
                WeatherForecast {
                    dt: ts + i * 3600,
                    temp: current.temp + rng.gen_range(-3.0..3.0),
                    feels_like: current.feels_like + rng.gen_range(-3.0..3.0),
                    humidity: humidity.clamp(0, 100) as u8,
                    main: if i % 8 == 0 {
                        pick(&mut *rng, &FORECAST_CONDITIONS)
                    } else {
                        current.main.clone()
                    },
                }
            })
            .collect()
    }

    /// Seven days of aggregates, oldest first, with a breakdown per registry city
    pub fn daily_summaries(&self, now: DateTime<Utc>) -> Vec<DailySummary> {
        let mut rng = self.rng();

        (0..SUMMARY_DAYS)
            .rev()
            .map(|days_ago| {
                let city_data: BTreeMap<String, CityAggregate> = REGISTRY
                    .iter()
                    .map(|city| {
                        let aggregate = CityAggregate {
                            avg_temp: 15.0 + rng.gen_range(0.0..15.0),
                            max_temp: 25.0 + rng.gen_range(0.0..10.0),
                            min_temp: 10.0 + rng.gen_range(0.0..10.0),
                            dominant_condition: pick(&mut *rng, &FALLBACK_CONDITIONS),
                        };
                        (city.id.to_string(), aggregate)
                    })
                    .collect();

                DailySummary {
                    date: now - Duration::days(days_ago),
                    avg_temp: 15.0 + rng.gen_range(0.0..15.0),
                    max_temp: 25.0 + rng.gen_range(0.0..10.0),
                    min_temp: 10.0 + rng.gen_range(0.0..10.0),
                    dominant_condition: pick(&mut *rng, &FALLBACK_CONDITIONS),
                    city_data: Some(city_data),
                }
            })
            .collect()
    }

    /// Usually nothing; otherwise one to three alerts raised within the last hour
    pub fn active_alerts(&self, now: DateTime<Utc>) -> Vec<WeatherAlert> {
        let mut rng = self.rng();
        if rng.gen_bool(NO_ACTIVE_ALERTS_PROBABILITY) {
            return Vec::new();
        }

        let now_ms = now.timestamp_millis();
        let count = rng.gen_range(1..=3);
        (0..count)
            .map(|_| {
                let timestamp = now_ms - rng_offset(&mut *rng, HOUR_MS);
                random_alert(&mut *rng, timestamp)
            })
            .collect()
    }

    /// Five to ten alerts from the past week, newest first
    pub fn alert_history(&self, now: DateTime<Utc>) -> Vec<WeatherAlert> {
        let mut rng = self.rng();
        let now_ms = now.timestamp_millis();
        let count = rng.gen_range(5..=10);

        let mut alerts: Vec<WeatherAlert> = (0..count)
            .map(|_| {
                let days_ago: i64 = rng.gen_range(1..=7);
                let timestamp = now_ms - days_ago * DAY_MS - rng_offset(&mut *rng, HOUR_MS);
                random_alert(&mut *rng, timestamp)
            })
            .collect();

        alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        alerts
    }

    /// Thirty days of retrospective data, oldest first, following a slow sine wave
    pub fn historical(&self, now: DateTime<Utc>) -> Vec<HistoricalData> {
        let mut rng = self.rng();

        (0..HISTORY_DAYS)
            .rev()
            .map(|days_ago| {
                let base = 15.0 + (days_ago as f64 / 5.0).sin() * 10.0;
                let dominant_condition = if days_ago % 7 == 0 {
                    "Rain"
                } else if days_ago % 5 == 0 {
                    "Clouds"
                } else {
                    "Clear"
                };

                HistoricalData {
                    date: now - Duration::days(days_ago),
                    avg_temp: base + rng.gen_range(0.0..2.0),
                    max_temp: base + 5.0 + rng.gen_range(0.0..3.0),
                    min_temp: base - 5.0 - rng.gen_range(0.0..3.0),
                    avg_humidity: 40 + rng.gen_range(0..40u8),
                    dominant_condition: dominant_condition.to_string(),
                }
            })
            .collect()
    }
}

fn pick<R: Rng>(rng: &mut R, labels: &[&str]) -> String {
    labels.choose(rng).copied().unwrap_or("Clear").to_string()
}

fn rng_offset<R: Rng>(rng: &mut R, max: i64) -> i64 {
    rng.gen_range(0..max)
}

fn random_alert<R: Rng>(rng: &mut R, timestamp: i64) -> WeatherAlert {
    let city = REGISTRY[rng.gen_range(0..REGISTRY.len())];
    let alert_type = AlertType::ALL[rng.gen_range(0..AlertType::ALL.len())];
    WeatherAlert::new(city.name, alert_type, timestamp)
}
