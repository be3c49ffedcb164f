//! Past alerts table on the alerts page

use std::fmt::Write;
use std::time::Duration;

use async_trait::async_trait;
use shared::{format_timestamp, WeatherAlert};

use super::html::{empty_state, escape, skeleton};
use super::{Component, ViewState};
use crate::error::AppResult;
use crate::services::settings::ALERTS_ROUTE;
use crate::services::WeatherService;

#[derive(Default)]
pub struct AlertsHistory;

#[async_trait]
impl Component for AlertsHistory {
    type Model = Vec<WeatherAlert>;

    fn name(&self) -> &'static str {
        "alerts-history"
    }

    fn route(&self) -> String {
        ALERTS_ROUTE.to_string()
    }

    fn refresh_interval(&self) -> Option<Duration> {
        None
    }

    async fn load(&self, weather: &WeatherService) -> AppResult<Vec<WeatherAlert>> {
        Ok(weather.fetch_alert_history().await)
    }

    fn render(&self, view: &ViewState<Vec<WeatherAlert>>) -> String {
        let body = match (&view.data, view.loading) {
            (None, true) => skeleton(5),
            (Some(alerts), _) if !alerts.is_empty() => {
                let mut rows = String::new();
                for alert in alerts {
                    let _ = write!(
                        rows,
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                        format_timestamp(&alert.raised_at()),
                        escape(&alert.city),
                        escape(alert.alert_type.label()),
                        escape(&alert.message),
                    );
                }
                format!(
                    r#"<table class="history"><thead><tr><th>Time</th><th>City</th><th>Type</th><th>Message</th></tr></thead><tbody>{}</tbody></table>"#,
                    rows
                )
            }
            _ => empty_state("No alerts in the past week."),
        };

        format!(r#"<section class="card alerts-history"><h2>Alert History</h2>{}</section>"#, body)
    }
}
