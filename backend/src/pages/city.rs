//! City detail page for registry and searched cities

use shared::{find_registry_city, parse_city_slug};

use super::layout::render_page;
use crate::components::header::city_header;
use crate::components::{render_once, CityDetail, HistoricalWeather};
use crate::error::{AppError, AppResult};
use crate::AppState;

/// `"<Name> Weather"` from the registry name or the capitalized slug name
pub fn page_title(city_id: &str) -> Option<String> {
    let name = match find_registry_city(city_id) {
        Some(city) => city.name,
        None => parse_city_slug(city_id)?.display_name(),
    };
    Some(format!("{} Weather", name))
}

pub async fn render(state: &AppState, city_id: &str) -> AppResult<String> {
    let title = page_title(city_id).ok_or_else(|| AppError::CityNotFound(city_id.to_string()))?;
    let city = state.weather.resolve_city(city_id).await?;

    let detail_refresh = state.config.dashboard.detail_refresh();
    let (detail, historical) = tokio::join!(
        render_once(CityDetail::new(city_id, detail_refresh), state.weather.clone(), &state.refresh),
        render_once(HistoricalWeather::new(city_id), state.weather.clone(), &state.refresh),
    );

    let body = format!("{}{}{}", city_header(&city.display_name()), detail, historical);
    Ok(render_page(&title, "", state.weather.source_kind(), &body))
}
