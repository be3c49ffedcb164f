//! Dashboard card with the current conditions of one registry city

use std::time::Duration;

use async_trait::async_trait;
use shared::{format_hour, weather_icon, City, WeatherData};

use super::html::{band_badge, escape, icon, skeleton, DATA_UNAVAILABLE};
use super::{Component, ViewState, DISPLAY_UNIT};
use crate::error::AppResult;
use crate::services::WeatherService;

pub struct CityCard {
    city: City,
    refresh: Duration,
}

impl CityCard {
    pub fn new(city: City, refresh: Duration) -> Self {
        Self { city, refresh }
    }
}

#[async_trait]
impl Component for CityCard {
    type Model = WeatherData;

    fn name(&self) -> &'static str {
        "city-card"
    }

    fn route(&self) -> String {
        "/".to_string()
    }

    fn refresh_interval(&self) -> Option<Duration> {
        Some(self.refresh)
    }

    async fn load(&self, weather: &WeatherService) -> AppResult<WeatherData> {
        weather.fetch_city_weather(&self.city.id).await
    }

    fn render(&self, view: &ViewState<WeatherData>) -> String {
        let name = escape(&self.city.name);
        let body = match (&view.data, view.loading) {
            (Some(w), _) => {
                let unit = DISPLAY_UNIT;
                format!(
                    concat!(
                        r#"<header><h3>{name}</h3>{badge}</header>"#,
                        r#"<p class="observed">{time} &middot; {main}</p>"#,
                        r#"<div class="reading">{icon}<span class="temp">{temp}</span>"#,
                        r#"<span class="feels">Feels like {feels}</span></div>"#,
                        r#"<dl><dt>Humidity</dt><dd>{humidity}%</dd>"#,
                        r#"<dt>Wind</dt><dd>{wind:.1} m/s</dd>"#,
                        r#"<dt>Min / Max</dt><dd>{min} / {max}</dd></dl>"#,
                        r#"<a href="/city/{id}">View details</a>"#,
                    ),
                    name = name,
                    badge = band_badge(w.band()),
                    time = format_hour(&w.observed_at()),
                    main = escape(&w.main),
                    icon = icon(weather_icon(&w.main)),
                    temp = unit.format(w.temp),
                    feels = unit.format(w.feels_like),
                    humidity = w.humidity,
                    wind = w.wind_speed,
                    min = unit.format(w.temp_min),
                    max = unit.format(w.temp_max),
                    id = escape(&self.city.id),
                )
            }
            (None, true) => skeleton(4),
            (None, false) => format!(
                r#"<header><h3>{}</h3></header><p class="empty">{}</p>"#,
                name, DATA_UNAVAILABLE
            ),
        };

        format!(r#"<article class="card city-card" data-city="{}">{}</article>"#, escape(&self.city.id), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::find_registry_city;

    fn card() -> CityCard {
        CityCard::new(find_registry_city("delhi").unwrap(), Duration::from_secs(300))
    }

    fn reading(temp: f64) -> WeatherData {
        WeatherData {
            dt: 1_700_000_000,
            main: "Rain".into(),
            temp,
            feels_like: temp + 1.4,
            temp_min: temp - 2.0,
            temp_max: temp + 2.0,
            humidity: 80,
            wind_speed: 4.25,
            clouds: 90,
            sunrise: None,
            sunset: None,
        }
    }

    #[test]
    fn test_loading_renders_skeleton() {
        let html = card().render(&ViewState::default());
        assert!(html.contains("skeleton"));
    }

    #[test]
    fn test_missing_data_renders_unavailable() {
        let view = ViewState {
            loading: false,
            data: None,
            updated_at: None,
        };
        assert!(card().render(&view).contains(DATA_UNAVAILABLE));
    }

    #[test]
    fn test_reading_renders_badge_and_link() {
        let view = ViewState {
            loading: false,
            data: Some(reading(36.4)),
            updated_at: None,
        };
        let html = card().render(&view);
        assert!(html.contains("Hot"));
        assert!(html.contains("36°C"));
        assert!(html.contains("Feels like 38°C"));
        assert!(html.contains(r#"href="/city/delhi""#));
        assert!(html.contains("rain-cloud"));
    }
}
