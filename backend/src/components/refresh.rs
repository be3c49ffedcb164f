//! Route revalidation signals
//!
//! Saving settings publishes the affected route; mounted components that
//! watch that route reload immediately instead of waiting for their timer.

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 16;

#[derive(Clone)]
pub struct RouteRefresh {
    tx: broadcast::Sender<String>,
}

impl Default for RouteRefresh {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteRefresh {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Publish `route`. Returns how many components were listening.
    pub fn revalidate(&self, route: &str) -> usize {
        // No receivers is not an error: nothing is mounted for that route.
        let receivers = self.tx.send(route.to_string()).unwrap_or(0);
        tracing::debug!(route, receivers, "Route revalidated");
        receivers
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }
}
