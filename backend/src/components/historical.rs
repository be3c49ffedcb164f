//! Thirty-day history for one city

use std::time::Duration;

use async_trait::async_trait;
use shared::{historical_chart, HistoricalChartKind, HistoricalData};

use super::html::{chart_table, skeleton, tabs};
use super::{Component, ViewState, DISPLAY_UNIT};
use crate::error::AppResult;
use crate::services::WeatherService;

pub struct HistoricalWeather {
    city_id: String,
}

impl HistoricalWeather {
    pub fn new(city_id: impl Into<String>) -> Self {
        Self {
            city_id: city_id.into(),
        }
    }
}

#[async_trait]
impl Component for HistoricalWeather {
    type Model = Vec<HistoricalData>;

    fn name(&self) -> &'static str {
        "historical-weather"
    }

    fn route(&self) -> String {
        format!("/city/{}", self.city_id)
    }

    fn refresh_interval(&self) -> Option<Duration> {
        None
    }

    async fn load(&self, weather: &WeatherService) -> AppResult<Vec<HistoricalData>> {
        Ok(weather.fetch_historical_weather(&self.city_id).await)
    }

    fn render(&self, view: &ViewState<Vec<HistoricalData>>) -> String {
        if view.data.is_none() && view.loading {
            return format!(r#"<section class="card historical">{}</section>"#, skeleton(6));
        }
        let days = view.data.as_deref().unwrap_or_default();

        let panels = [
            ("Temperature", HistoricalChartKind::Temperature),
            ("Humidity", HistoricalChartKind::Humidity),
            ("Conditions", HistoricalChartKind::Conditions),
        ]
        .map(|(label, kind)| (label, chart_table(&historical_chart(days, kind), DISPLAY_UNIT)));

        format!(
            r#"<section class="card historical"><h2>Historical Weather</h2><p>The past 30 days</p>{}</section>"#,
            tabs("historical", &panels)
        )
    }
}
