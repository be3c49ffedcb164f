//! Presentation components
//!
//! Each weather component loads one fetch-layer operation and renders the
//! result as an HTML fragment. [`Mounted`] drives the load on a timer.

use std::time::Duration;

use async_trait::async_trait;
use shared::TemperatureUnit;

use crate::error::AppResult;
use crate::services::WeatherService;

pub mod alerts_history;
pub mod city_card;
pub mod city_detail;
pub mod forms;
pub mod header;
pub mod historical;
pub mod html;
pub mod poller;
pub mod refresh;
pub mod weather_alerts;
pub mod weather_summary;

pub use alerts_history::AlertsHistory;
pub use city_card::CityCard;
pub use city_detail::CityDetail;
pub use historical::HistoricalWeather;
pub use poller::{render_once, Mounted, ViewState};
pub use refresh::RouteRefresh;
pub use weather_alerts::WeatherAlerts;
pub use weather_summary::WeatherSummary;

/// Temperatures are rendered in this unit
pub const DISPLAY_UNIT: TemperatureUnit = TemperatureUnit::Celsius;

/// A view that loads data from the fetch layer and renders it
#[async_trait]
pub trait Component: Send + Sync + 'static {
    type Model: Clone + Send + Sync + 'static;

    fn name(&self) -> &'static str;

    /// Page the component is mounted on
    fn route(&self) -> String;

    /// Whether a revalidation of `route` should reload this component
    fn reloads_on(&self, route: &str) -> bool {
        route == self.route()
    }

    /// `None` loads once on mount
    fn refresh_interval(&self) -> Option<Duration>;

    async fn load(&self, weather: &WeatherService) -> AppResult<Self::Model>;

    fn render(&self, view: &ViewState<Self::Model>) -> String;
}
