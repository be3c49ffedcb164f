//! Server-rendered pages

pub mod alerts;
pub mod city;
pub mod dashboard;
pub mod layout;
pub mod settings;

pub use dashboard::Dashboard;

use crate::components::html::empty_state;
use crate::services::SourceKind;

pub fn not_found(source: SourceKind, message: &str) -> String {
    let body = format!(
        r#"<div class="page-header"><h1>Not found</h1></div>{}<p><a href="/">Back to dashboard</a></p>"#,
        empty_state(message)
    );
    layout::render_page("Not found", "", source, &body)
}
