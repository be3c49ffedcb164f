//! Current conditions, weather parameters and forecast chart for one city

use std::fmt::Write;
use std::time::Duration;

use async_trait::async_trait;
use shared::{
    forecast_chart, format_hour, format_timestamp, weather_icon, ChartData, CityWeatherDetail,
    ForecastChartKind,
};

use super::html::{chart_table, escape, icon, skeleton, tabs, DATA_UNAVAILABLE};
use super::{Component, ViewState, DISPLAY_UNIT};
use crate::error::AppResult;
use crate::services::WeatherService;

pub struct CityDetail {
    city_id: String,
    refresh: Duration,
}

impl CityDetail {
    pub fn new(city_id: impl Into<String>, refresh: Duration) -> Self {
        Self {
            city_id: city_id.into(),
            refresh,
        }
    }
}

#[async_trait]
impl Component for CityDetail {
    type Model = CityWeatherDetail;

    fn name(&self) -> &'static str {
        "city-detail"
    }

    fn route(&self) -> String {
        format!("/city/{}", self.city_id)
    }

    fn refresh_interval(&self) -> Option<Duration> {
        Some(self.refresh)
    }

    async fn load(&self, weather: &WeatherService) -> AppResult<CityWeatherDetail> {
        weather.fetch_city_weather_detail(&self.city_id).await
    }

    fn render(&self, view: &ViewState<CityWeatherDetail>) -> String {
        let detail = match (&view.data, view.loading) {
            (Some(detail), _) => detail,
            (None, true) => return skeleton(8),
            (None, false) => return format!(r#"<p class="empty">{}</p>"#, DATA_UNAVAILABLE),
        };

        let unit = DISPLAY_UNIT;
        let current = &detail.current;

        let mut parameters = format!(
            concat!(
                r#"<dt>Min / Max</dt><dd>{} / {}</dd>"#,
                r#"<dt>Wind speed</dt><dd>{:.1} m/s</dd>"#,
                r#"<dt>Humidity</dt><dd>{}%</dd>"#,
                r#"<dt>Cloud cover</dt><dd>{}%</dd>"#,
            ),
            unit.format(current.temp_min),
            unit.format(current.temp_max),
            current.wind_speed,
            current.humidity,
            current.clouds,
        );
        let sun_times = [("Sunrise", current.sunrise), ("Sunset", current.sunset)];
        for (label, at) in sun_times {
            if let Some(at) = at.and_then(|ts| chrono::DateTime::from_timestamp(ts, 0)) {
                let _ = write!(parameters, "<dt>{}</dt><dd>{}</dd>", label, format_hour(&at));
            }
        }

        let daily = ChartData::Forecast(forecast_chart(&detail.forecast, ForecastChartKind::Daily));
        let hourly = ChartData::Forecast(forecast_chart(&detail.forecast, ForecastChartKind::Hourly));

        format!(
            concat!(
                r#"<section class="card city-detail">"#,
                r#"<div class="reading">{icon}<div><p class="condition">{main}</p>"#,
                r#"<p class="updated">Last updated {updated}</p></div>"#,
                r#"<span class="temp">{temp}</span><span class="feels">Feels like {feels}</span></div>"#,
                r#"<h3>Weather parameters</h3><dl class="parameters">{parameters}</dl>"#,
                r#"<h3>Forecast</h3>{forecast}"#,
                r#"</section>"#,
            ),
            icon = icon(weather_icon(&current.main)),
            main = escape(&current.main),
            updated = format_timestamp(&current.observed_at()),
            temp = unit.format(current.temp),
            feels = unit.format(current.feels_like),
            parameters = parameters,
            forecast = tabs(
                "forecast",
                &[
                    ("Daily", chart_table(&daily, unit)),
                    ("Hourly", chart_table(&hourly, unit)),
                ],
            ),
        )
    }
}
