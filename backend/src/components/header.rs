//! Navigation, page headers and the city search box

use std::fmt::Write;

use shared::City;

use super::html::{empty_state, escape};

const NAV_LINKS: [(&str, &str); 3] = [("/", "Dashboard"), ("/alerts", "Alerts"), ("/settings", "Settings")];

/// Dashboard header with navigation; `active` is the current path
pub fn dashboard_header(active: &str) -> String {
    let mut nav = String::new();
    for (href, label) in NAV_LINKS {
        let class = if href == active { r#" class="active""# } else { "" };
        let _ = write!(nav, r#"<a href="{}"{}>{}</a>"#, href, class, label);
    }
    format!(
        r#"<header class="site-header"><a class="brand" href="/">Weather Monitor</a><nav>{}</nav></header>"#,
        nav
    )
}

/// Heading for the city page with a link back to the dashboard
pub fn city_header(title: &str) -> String {
    format!(
        r#"<div class="page-header"><a class="back" href="/">&larr; Back to dashboard</a><h1>{}</h1></div>"#,
        escape(title)
    )
}

pub fn page_heading(title: &str, subtitle: &str) -> String {
    format!(
        r#"<div class="page-header"><h1>{}</h1><p>{}</p></div>"#,
        escape(title),
        escape(subtitle)
    )
}

pub fn search_box(query: &str) -> String {
    format!(
        r#"<form class="search" method="get" action="/"><input type="search" name="q" value="{}" placeholder="Search for a city..." minlength="2"><button type="submit">Search</button></form>"#,
        escape(query)
    )
}

/// Search results linking to each city's detail page
pub fn search_results(query: &str, cities: &[City]) -> String {
    if cities.is_empty() {
        return format!(
            r#"<section class="search-results">{}</section>"#,
            empty_state(&format!("No cities found for \"{}\"", query))
        );
    }

    let mut items = String::new();
    for city in cities {
        let _ = write!(
            items,
            r#"<li><a href="/city/{}">{}</a> <small>{:.2}, {:.2}</small></li>"#,
            escape(&city.id),
            escape(&city.display_name()),
            city.lat,
            city.lon
        );
    }
    format!(r#"<section class="search-results"><ul>{}</ul></section>"#, items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_nav_link() {
        let html = dashboard_header("/alerts");
        assert!(html.contains(r#"<a href="/alerts" class="active">Alerts</a>"#));
        assert!(html.contains(r#"<a href="/settings">Settings</a>"#));
    }

    #[test]
    fn test_search_results_link_to_slug() {
        let cities = vec![City::searched("New York", "US", 40.71, -74.01)];
        let html = search_results("new york", &cities);
        assert!(html.contains(r#"href="/city/new-york-us""#));
        assert!(html.contains("New York (US)"));
    }

    #[test]
    fn test_search_results_link_stays_one_path_segment() {
        let cities = vec![City::searched("Biel/Bienne", "CH", 47.14, 7.25)];
        let html = search_results("biel", &cities);
        assert!(html.contains(r#"href="/city/biel-bienne-ch""#));
        assert!(html.contains("Biel/Bienne (CH)"));
    }

    #[test]
    fn test_search_results_escape_query() {
        let html = search_results("<script>", &[]);
        assert!(html.contains("&lt;script&gt;"));
    }
}
