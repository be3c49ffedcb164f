//! Small HTML building blocks shared by the components

use std::fmt::Write;

use shared::{ChartData, TemperatureBand, TemperatureUnit, WeatherIcon, REGISTRY};

pub const NO_DATA: &str = "No data available";
pub const DATA_UNAVAILABLE: &str = "Data unavailable";

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Grey placeholder bars shown while a component loads
pub fn skeleton(lines: usize) -> String {
    let mut html = String::from(r#"<div class="skeleton" aria-busy="true">"#);
    for _ in 0..lines {
        html.push_str(r#"<div class="skeleton-line"></div>"#);
    }
    html.push_str("</div>");
    html
}

pub fn empty_state(message: &str) -> String {
    format!(r#"<p class="empty">{}</p>"#, escape(message))
}

pub fn icon(icon: WeatherIcon) -> String {
    format!(
        r#"<span class="icon icon-{}" aria-hidden="true">{}</span>"#,
        icon.name(),
        icon.glyph()
    )
}

pub fn band_badge(band: TemperatureBand) -> String {
    let class = match band {
        TemperatureBand::Hot => "badge badge-hot",
        TemperatureBand::Cold => "badge badge-cold",
        TemperatureBand::Normal => "badge",
    };
    format!(r#"<span class="{}">{}</span>"#, class, band)
}

/// CSS-only tab strip: one radio input per tab, first tab selected
pub fn tabs(group: &str, panels: &[(&str, String)]) -> String {
    let mut html = format!(r#"<div class="tabs" id="{}">"#, escape(group));
    for (idx, (label, content)) in panels.iter().enumerate() {
        let id = format!("{}-{}", group, idx);
        let _ = write!(
            html,
            r#"<input type="radio" name="{group}" id="{id}"{checked}><label for="{id}">{label}</label><div class="tab-panel">{content}</div>"#,
            group = escape(group),
            id = escape(&id),
            checked = if idx == 0 { " checked" } else { "" },
            label = escape(label),
            content = content,
        );
    }
    html.push_str("</div>");
    html
}

/// Render chart points as a data table
pub fn chart_table(chart: &ChartData, unit: TemperatureUnit) -> String {
    if chart.is_empty() {
        return empty_state(NO_DATA);
    }

    let temp = |celsius: f64| escape(&unit.format(celsius));
    let mut rows = String::new();

    let header = match chart {
        ChartData::Forecast(points) => {
            for p in points {
                let _ = write!(
                    rows,
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}%</td></tr>",
                    escape(&p.time),
                    temp(p.temp as f64),
                    temp(p.feels_like as f64),
                    p.humidity
                );
            }
            "<th>Time</th><th>Temperature</th><th>Feels like</th><th>Humidity</th>".to_string()
        }
        ChartData::Temperature(points) => {
            for p in points {
                let _ = write!(
                    rows,
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&p.date),
                    temp(p.avg),
                    temp(p.max),
                    temp(p.min)
                );
            }
            "<th>Date</th><th>Average</th><th>Max</th><th>Min</th>".to_string()
        }
        ChartData::Humidity(points) => {
            for p in points {
                let _ = write!(rows, "<tr><td>{}</td><td>{}%</td></tr>", escape(&p.date), p.humidity);
            }
            "<th>Date</th><th>Humidity</th>".to_string()
        }
        ChartData::Conditions(counts) => {
            for c in counts {
                let _ = write!(
                    rows,
                    "<tr><td>{}</td><td>{}</td></tr>",
                    escape(&c.condition),
                    c.count
                );
            }
            "<th>Condition</th><th>Days</th>".to_string()
        }
        ChartData::Cities(points) => {
            for p in points {
                let _ = write!(rows, "<tr><td>{}</td>", escape(&p.date));
                for city in REGISTRY.iter() {
                    let cell = match p.values.get(city.id).copied().flatten() {
                        Some(value) => temp(value),
                        None => "&ndash;".to_string(),
                    };
                    let _ = write!(rows, "<td>{}</td>", cell);
                }
                rows.push_str("</tr>");
            }
            let mut header = String::from("<th>Date</th>");
            for city in REGISTRY.iter() {
                let _ = write!(header, "<th>{}</th>", escape(city.name));
            }
            header
        }
    };

    format!(
        r#"<table class="chart"><thead><tr>{}</tr></thead><tbody>{}</tbody></table>"#,
        header, rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ConditionCount, ForecastPoint};

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<b>"Rain" & 'Fog'</b>"#), "&lt;b&gt;&quot;Rain&quot; &amp; &#39;Fog&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_empty_chart_shows_no_data() {
        let html = chart_table(&ChartData::Conditions(vec![]), TemperatureUnit::Celsius);
        assert!(html.contains(NO_DATA));
    }

    #[test]
    fn test_forecast_table_rows() {
        let chart = ChartData::Forecast(vec![ForecastPoint {
            time: "14:00".into(),
            temp: 24,
            feels_like: 26,
            humidity: 55,
        }]);
        let html = chart_table(&chart, TemperatureUnit::Celsius);
        assert!(html.contains("<td>14:00</td><td>24°C</td><td>26°C</td><td>55%</td>"));
    }

    #[test]
    fn test_condition_table() {
        let chart = ChartData::Conditions(vec![ConditionCount {
            condition: "Rain".into(),
            count: 3,
        }]);
        assert!(chart_table(&chart, TemperatureUnit::Celsius).contains("<td>Rain</td><td>3</td>"));
    }

    #[test]
    fn test_first_tab_checked() {
        let html = tabs("forecast", &[("Daily", "a".into()), ("Hourly", "b".into())]);
        assert!(html.contains(r#"id="forecast-0" checked"#));
        assert!(!html.contains(r#"id="forecast-1" checked"#));
    }
}
