//! System settings page

use shared::SystemSettings;

use super::layout::render_page;
use crate::components::forms::{system_settings_form, FormNotice};
use crate::components::header::page_heading;
use crate::services::SourceKind;

pub const TITLE: &str = "Weather Monitoring Settings";

pub fn render(source: SourceKind, settings: &SystemSettings, notice: &FormNotice) -> String {
    let body = format!(
        "{}{}",
        page_heading(TITLE, "Configure API access, refresh and display preferences"),
        system_settings_form(settings, notice)
    );
    render_page(TITLE, "/settings", source, &body)
}
