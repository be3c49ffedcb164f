//! Alerts configuration page

use shared::AlertSettings;

use super::layout::render_page;
use crate::components::forms::{alert_settings_form, FormNotice};
use crate::components::header::page_heading;
use crate::components::{render_once, AlertsHistory};
use crate::AppState;

pub const TITLE: &str = "Weather Alerts Configuration";

pub async fn render(state: &AppState, settings: &AlertSettings, notice: &FormNotice) -> String {
    let history = render_once(AlertsHistory, state.weather.clone(), &state.refresh).await;

    let body = format!(
        "{}{}{}",
        page_heading(TITLE, "Configure temperature thresholds and notifications"),
        alert_settings_form(settings, notice),
        history
    );
    render_page(TITLE, "/alerts", state.weather.source_kind(), &body)
}
