//! Seven-day summary across the registry cities

use std::time::Duration;

use async_trait::async_trait;
use shared::{summary_chart, DailySummary, SummaryChartKind};

use super::html::{chart_table, skeleton, tabs};
use super::{Component, ViewState, DISPLAY_UNIT};
use crate::error::AppResult;
use crate::services::WeatherService;

pub struct WeatherSummary {
    refresh: Duration,
}

impl WeatherSummary {
    pub fn new(refresh: Duration) -> Self {
        Self { refresh }
    }
}

#[async_trait]
impl Component for WeatherSummary {
    type Model = Vec<DailySummary>;

    fn name(&self) -> &'static str {
        "weather-summary"
    }

    fn route(&self) -> String {
        "/".to_string()
    }

    fn refresh_interval(&self) -> Option<Duration> {
        Some(self.refresh)
    }

    async fn load(&self, weather: &WeatherService) -> AppResult<Vec<DailySummary>> {
        Ok(weather.fetch_daily_summary().await)
    }

    fn render(&self, view: &ViewState<Vec<DailySummary>>) -> String {
        if view.data.is_none() && view.loading {
            return format!(r#"<section class="card summary">{}</section>"#, skeleton(6));
        }
        let days = view.data.as_deref().unwrap_or_default();

        let panels = [
            ("Temperature", SummaryChartKind::Temperature),
            ("Conditions", SummaryChartKind::Conditions),
            ("By City", SummaryChartKind::Cities),
        ]
        .map(|(label, kind)| (label, chart_table(&summary_chart(days, kind), DISPLAY_UNIT)));

        format!(
            r#"<section class="card summary"><h2>Weather Summary</h2><p>Daily aggregates for the past week</p>{}</section>"#,
            tabs("summary", &panels)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_summaries_renders_no_data() {
        let view = ViewState {
            loading: false,
            data: Some(vec![]),
            updated_at: None,
        };
        let html = WeatherSummary::new(Duration::from_secs(1800)).render(&view);
        assert_eq!(html.matches("No data available").count(), 3);
    }
}
