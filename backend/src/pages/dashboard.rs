//! Dashboard page: one card per registry city, the weekly summary and the
//! active alerts. These components stay mounted for the server's lifetime.

use shared::{registry_cities, City};

use super::layout::render_page;
use crate::components::header::{page_heading, search_box, search_results};
use crate::components::{CityCard, Mounted, RouteRefresh, WeatherAlerts, WeatherSummary};
use crate::config::DashboardConfig;
use crate::services::WeatherService;

pub const TITLE: &str = "Weather Monitoring Dashboard";

pub struct Dashboard {
    cards: Vec<Mounted<CityCard>>,
    summary: Mounted<WeatherSummary>,
    alerts: Mounted<WeatherAlerts>,
}

impl Dashboard {
    /// Mount every dashboard component. Must run inside a tokio runtime.
    pub fn mount(weather: &WeatherService, refresh: &RouteRefresh, config: &DashboardConfig) -> Self {
        let cards = registry_cities()
            .into_iter()
            .map(|city| Mounted::mount(CityCard::new(city, config.card_refresh()), weather.clone(), refresh))
            .collect();

        Self {
            cards,
            summary: Mounted::mount(WeatherSummary::new(config.summary_refresh()), weather.clone(), refresh),
            alerts: Mounted::mount(WeatherAlerts::new(config.alerts_refresh()), weather.clone(), refresh),
        }
    }

    pub fn is_running(&self) -> bool {
        self.cards.iter().all(Mounted::is_running) && self.summary.is_running() && self.alerts.is_running()
    }

    /// Page body; `search` carries a submitted query and its matches
    pub async fn render_body(&self, search: Option<(&str, &[City])>) -> String {
        let mut body = page_heading(TITLE, "Real-time weather monitoring for major Indian metros");

        let query = search.map(|(q, _)| q).unwrap_or_default();
        body.push_str(&search_box(query));
        if let Some((query, cities)) = search {
            body.push_str(&search_results(query, cities));
        }

        body.push_str(r#"<div class="grid">"#);
        for card in &self.cards {
            body.push_str(&card.render().await);
        }
        body.push_str("</div>");

        body.push_str(&self.summary.render().await);
        body.push_str(&self.alerts.render().await);
        body
    }
}

pub async fn render(weather: &WeatherService, dashboard: &Dashboard, query: Option<&str>) -> String {
    let query = query.map(str::trim).filter(|q| !q.is_empty());

    let body = match query {
        Some(q) => {
            let cities = weather.fetch_city_by_name(q).await;
            dashboard.render_body(Some((q, cities.as_slice()))).await
        }
        None => dashboard.render_body(None).await,
    };

    render_page(TITLE, "/", weather.source_kind(), &body)
}
