//! Shared page shell

use crate::components::header::dashboard_header;
use crate::components::html::escape;
use crate::services::SourceKind;

pub const DEMO_BANNER: &str =
    "Showing demo data: no OpenWeatherMap API key is configured, so every reading on this page is generated.";

const STYLES: &str = r#"
body{font-family:system-ui,sans-serif;margin:0;background:#f5f7fa;color:#1f2933}
main{max-width:1100px;margin:0 auto;padding:1rem}
.site-header{display:flex;justify-content:space-between;align-items:center;padding:.75rem 1rem;background:#1e3a5f;color:#fff}
.site-header a{color:#fff;margin-left:1rem;text-decoration:none}.site-header a.active{font-weight:700}
.banner{background:#fff4ce;border-bottom:1px solid #e0c45c;padding:.5rem 1rem}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:1rem}
.card{background:#fff;border-radius:8px;padding:1rem;box-shadow:0 1px 3px rgba(0,0,0,.1);margin-bottom:1rem}
.badge{padding:.1rem .5rem;border-radius:4px;background:#e4e7eb}.badge-hot{background:#f8b4b4}.badge-cold{background:#b4d4f8}
.skeleton-line{height:.8rem;margin:.4rem 0;background:#e4e7eb;border-radius:4px}
.tabs>input{display:none}.tabs>label{display:inline-block;padding:.4rem .8rem;cursor:pointer}
.tabs>input:checked+label{border-bottom:2px solid #1e3a5f}.tab-panel{display:none;width:100%}
.tabs>input:checked+label+.tab-panel{display:block}
table{border-collapse:collapse;width:100%}td,th{padding:.3rem .5rem;border-bottom:1px solid #e4e7eb;text-align:left}
.notice-success{color:#1d6b2f}.notice-error{color:#a61b1b}.empty{color:#616e7c}
"#;

/// Full HTML document around `body`
pub fn render_page(title: &str, active: &str, source: SourceKind, body: &str) -> String {
    let banner = match source {
        SourceKind::Offline => format!(r#"<div class="banner demo" role="note">{}</div>"#, DEMO_BANNER),
        SourceKind::Live => String::new(),
    };

    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title><style>{styles}</style></head>",
            "<body>{header}{banner}<main>{body}</main></body></html>",
        ),
        title = escape(title),
        styles = STYLES,
        header = dashboard_header(active),
        banner = banner,
        body = body,
    )
}
