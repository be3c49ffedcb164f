//! Polling lifecycle for mounted components
//!
//! Mounting a component spawns one tokio task that loads it immediately, then
//! again on every tick of its refresh interval and whenever a watched route
//! is revalidated. Dropping the handle aborts the task.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use super::{Component, RouteRefresh};
use crate::services::WeatherService;

/// What a component currently shows
#[derive(Debug, Clone)]
pub struct ViewState<T> {
    pub loading: bool,
    pub data: Option<T>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            loading: true,
            data: None,
            updated_at: None,
        }
    }
}

/// A component with a running poll task
pub struct Mounted<C: Component> {
    component: Arc<C>,
    state: Arc<RwLock<ViewState<C::Model>>>,
    loads: watch::Receiver<u64>,
    task: JoinHandle<()>,
}

impl<C: Component> Mounted<C> {
    pub fn mount(component: C, weather: WeatherService, refresh: &RouteRefresh) -> Self {
        let component = Arc::new(component);
        let state = Arc::new(RwLock::new(ViewState::default()));
        let (loads_tx, loads) = watch::channel(0u64);

        tracing::debug!(component = component.name(), route = %component.route(), "Mounting");
        let task = tokio::spawn(poll(
            component.clone(),
            weather,
            state.clone(),
            loads_tx,
            refresh.subscribe(),
        ));

        Self {
            component,
            state,
            loads,
            task,
        }
    }

    pub async fn snapshot(&self) -> ViewState<C::Model> {
        self.state.read().await.clone()
    }

    pub async fn render(&self) -> String {
        let view = self.state.read().await;
        self.component.render(&view)
    }

    /// Completed loads so far, successful or not
    pub fn load_count(&self) -> u64 {
        *self.loads.borrow()
    }

    /// Wait until at least `count` loads have completed
    pub async fn wait_for_loads(&mut self, count: u64) {
        // The sender lives in the task; it only drops if the task ends.
        let _ = self.loads.wait_for(|n| *n >= count).await;
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl<C: Component> Drop for Mounted<C> {
    fn drop(&mut self) {
        tracing::debug!(component = self.component.name(), "Unmounting");
        self.task.abort();
    }
}

/// Mount for the duration of one request: load once, render, unmount
pub async fn render_once<C: Component>(
    component: C,
    weather: WeatherService,
    refresh: &RouteRefresh,
) -> String {
    let mut mounted = Mounted::mount(component, weather, refresh);
    mounted.wait_for_loads(1).await;
    mounted.render().await
}

async fn poll<C: Component>(
    component: Arc<C>,
    weather: WeatherService,
    state: Arc<RwLock<ViewState<C::Model>>>,
    loads: watch::Sender<u64>,
    mut routes: broadcast::Receiver<String>,
) {
    let mut ticker = component.refresh_interval().map(new_ticker);
    let mut listening = true;

    loop {
        load_into(component.as_ref(), &weather, &state).await;
        loads.send_modify(|n| *n += 1);

        loop {
            tokio::select! {
                _ = next_tick(&mut ticker) => break,
                msg = routes.recv(), if listening => match msg {
                    Ok(route) if component.reloads_on(&route) => break,
                    Ok(_) => {}
                    Err(RecvError::Lagged(_)) => break,
                    Err(RecvError::Closed) => listening = false,
                },
            }
        }
    }
}

async fn load_into<C: Component>(
    component: &C,
    weather: &WeatherService,
    state: &RwLock<ViewState<C::Model>>,
) {
    state.write().await.loading = true;

    let result = component.load(weather).await;

    let mut view = state.write().await;
    match result {
        Ok(data) => {
            view.data = Some(data);
            view.updated_at = Some(Utc::now());
        }
        Err(e) => {
            // Prior data stays on screen.
            tracing::warn!(component = component.name(), "Load failed: {}", e);
        }
    }
    view.loading = false;
}

fn new_ticker(period: Duration) -> Interval {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
