//! Component lifecycle tests
//!
//! Tests for mounted components including:
//! - Initial load and view state
//! - Timer-driven reloads
//! - Route revalidation

use std::sync::Arc;
use std::time::Duration;

use shared::find_registry_city;
use tokio::time::timeout;
use weather_dashboard::components::{
    render_once, AlertsHistory, CityCard, CityDetail, Mounted, RouteRefresh, WeatherAlerts,
};
use weather_dashboard::services::{OfflineSource, Synthesizer, WeatherService};

const WAIT: Duration = Duration::from_secs(5);

fn offline_weather() -> WeatherService {
    WeatherService::new(Arc::new(OfflineSource), Arc::new(Synthesizer::seeded(7)), false)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[tokio::test]
    async fn test_mount_loads_immediately() {
        let refresh = RouteRefresh::new();
        let delhi = find_registry_city("delhi").unwrap();
        let mut card = Mounted::mount(CityCard::new(delhi, Duration::from_secs(300)), offline_weather(), &refresh);

        timeout(WAIT, card.wait_for_loads(1)).await.unwrap();

        let view = card.snapshot().await;
        assert!(!view.loading);
        assert!(view.data.is_some());
        assert!(view.updated_at.is_some());
        assert!(card.is_running());
        assert!(card.render().await.contains("/city/delhi"));
    }

    #[tokio::test]
    async fn test_interval_triggers_reload() {
        let refresh = RouteRefresh::new();
        let mumbai = find_registry_city("mumbai").unwrap();
        let mut card = Mounted::mount(CityCard::new(mumbai, Duration::from_millis(20)), offline_weather(), &refresh);

        timeout(WAIT, card.wait_for_loads(3)).await.unwrap();
        assert!(card.load_count() >= 3);
    }

    #[tokio::test]
    async fn test_revalidating_alerts_route_reloads_dashboard_alerts() {
        let refresh = RouteRefresh::new();
        let mut alerts = Mounted::mount(WeatherAlerts::new(Duration::from_secs(300)), offline_weather(), &refresh);
        timeout(WAIT, alerts.wait_for_loads(1)).await.unwrap();

        assert!(refresh.revalidate("/alerts") >= 1);
        timeout(WAIT, alerts.wait_for_loads(2)).await.unwrap();
        assert_eq!(alerts.load_count(), 2);
    }

    #[tokio::test]
    async fn test_unrelated_route_does_not_reload() {
        let refresh = RouteRefresh::new();
        let mut history = Mounted::mount(AlertsHistory, offline_weather(), &refresh);
        timeout(WAIT, history.wait_for_loads(1)).await.unwrap();

        refresh.revalidate("/settings");
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(history.load_count(), 1);

        refresh.revalidate("/alerts");
        timeout(WAIT, history.wait_for_loads(2)).await.unwrap();
    }

    #[tokio::test]
    async fn test_render_once_returns_loaded_view() {
        let refresh = RouteRefresh::new();
        let html = timeout(
            WAIT,
            render_once(CityDetail::new("chennai", Duration::from_secs(300)), offline_weather(), &refresh),
        )
        .await
        .unwrap();

        assert!(html.contains("Daily"));
        assert!(html.contains("Hourly"));
    }

    #[tokio::test]
    async fn test_failed_load_leaves_no_data() {
        let refresh = RouteRefresh::new();
        let mut detail = Mounted::mount(
            CityDetail::new("atlantis", Duration::from_secs(300)),
            offline_weather(),
            &refresh,
        );
        timeout(WAIT, detail.wait_for_loads(1)).await.unwrap();

        let view = detail.snapshot().await;
        assert!(!view.loading);
        assert!(view.data.is_none());
    }
}
