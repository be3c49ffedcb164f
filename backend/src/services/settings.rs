//! Settings service
//!
//! Validates and logs alert and system settings. Nothing is stored; a saved
//! payload only triggers a revalidation of the page that shows it.

use std::time::Duration;

use shared::{check_settings, AlertSettings, SystemSettings};

use crate::components::RouteRefresh;
use crate::error::AppResult;

pub const SAVE_LATENCY: Duration = Duration::from_millis(1000);

pub const ALERTS_ROUTE: &str = "/alerts";
pub const SETTINGS_ROUTE: &str = "/settings";

#[derive(Clone)]
pub struct SettingsService {
    refresh: RouteRefresh,
    simulate_latency: bool,
}

impl SettingsService {
    pub fn new(refresh: RouteRefresh, simulate_latency: bool) -> Self {
        Self {
            refresh,
            simulate_latency,
        }
    }

    /// Validate, log and acknowledge alert settings
    pub async fn save_alert_settings(&self, settings: AlertSettings) -> AppResult<AlertSettings> {
        check_settings(&settings)?;
        self.delay().await;

        tracing::info!(?settings, "Alert settings saved");
        self.refresh.revalidate(ALERTS_ROUTE);
        Ok(settings)
    }

    /// Validate, log and acknowledge system settings
    pub async fn save_settings(&self, settings: SystemSettings) -> AppResult<SystemSettings> {
        check_settings(&settings)?;
        self.delay().await;

        tracing::info!(?settings, "Settings saved");
        self.refresh.revalidate(SETTINGS_ROUTE);
        Ok(settings)
    }

    async fn delay(&self) {
        if self.simulate_latency {
            tokio::time::sleep(SAVE_LATENCY).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_valid_alert_settings_publish_refresh() {
        let refresh = RouteRefresh::new();
        let mut rx = refresh.subscribe();
        let service = SettingsService::new(refresh, false);

        let saved = service
            .save_alert_settings(AlertSettings::default())
            .await
            .unwrap();
        assert_eq!(saved, AlertSettings::default());
        assert_eq!(rx.recv().await.unwrap(), ALERTS_ROUTE);
    }

    #[tokio::test]
    async fn test_invalid_settings_are_not_published() {
        let refresh = RouteRefresh::new();
        let mut rx = refresh.subscribe();
        let service = SettingsService::new(refresh, false);

        let settings = SystemSettings {
            refresh_interval: 2,
            ..SystemSettings::default()
        };
        let err = service.save_settings(settings).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "refreshInterval"));
        assert!(rx.try_recv().is_err());
    }
}
