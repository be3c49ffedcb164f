//! Active alerts panel on the dashboard

use std::fmt::Write;
use std::time::Duration;

use async_trait::async_trait;
use shared::{format_timestamp, WeatherAlert};

use super::html::{empty_state, escape, skeleton};
use super::{Component, ViewState};
use crate::error::AppResult;
use crate::services::settings::ALERTS_ROUTE;
use crate::services::WeatherService;

pub const NO_ACTIVE_ALERTS: &str = "No active weather alerts at this time.";

pub struct WeatherAlerts {
    refresh: Duration,
}

impl WeatherAlerts {
    pub fn new(refresh: Duration) -> Self {
        Self { refresh }
    }
}

#[async_trait]
impl Component for WeatherAlerts {
    type Model = Vec<WeatherAlert>;

    fn name(&self) -> &'static str {
        "weather-alerts"
    }

    fn route(&self) -> String {
        "/".to_string()
    }

    // New alert settings should show up on the dashboard right away.
    fn reloads_on(&self, route: &str) -> bool {
        route == "/" || route == ALERTS_ROUTE
    }

    fn refresh_interval(&self) -> Option<Duration> {
        Some(self.refresh)
    }

    async fn load(&self, weather: &WeatherService) -> AppResult<Vec<WeatherAlert>> {
        Ok(weather.fetch_active_alerts().await)
    }

    fn render(&self, view: &ViewState<Vec<WeatherAlert>>) -> String {
        let body = match (&view.data, view.loading) {
            (None, true) => skeleton(3),
            (Some(alerts), _) if !alerts.is_empty() => {
                let mut items = String::from(r#"<ul class="alerts">"#);
                for alert in alerts {
                    let _ = write!(
                        items,
                        r#"<li class="alert"><strong>{}</strong> &middot; {}<p>{}</p><time>{}</time></li>"#,
                        escape(alert.alert_type.label()),
                        escape(&alert.city),
                        escape(&alert.message),
                        format_timestamp(&alert.raised_at()),
                    );
                }
                items.push_str("</ul>");
                items
            }
            _ => empty_state(NO_ACTIVE_ALERTS),
        };

        format!(r#"<section class="card active-alerts"><h2>Weather Alerts</h2>{}</section>"#, body)
    }
}
