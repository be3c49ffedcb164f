//! Time-based response cache for the weather API client

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// Current conditions stay fresh for five minutes
pub const CURRENT_TTL: Duration = Duration::from_secs(300);

/// Forecasts stay fresh for one hour
pub const FORECAST_TTL: Duration = Duration::from_secs(3600);

/// Geocoding results stay fresh for a day
pub const GEOCODE_TTL: Duration = Duration::from_secs(86_400);

/// Most entries a single cache holds before evicting the oldest
pub const DEFAULT_CAPACITY: usize = 1024;

/// Values keyed by request, expiring `ttl` after insertion.
///
/// Holds at most `capacity` entries. Every entry shares the same ttl, so
/// insertion order is also expiry order and eviction only ever looks at the
/// front of the queue.
pub struct TtlCache<V> {
    ttl: Duration,
    capacity: usize,
    entries: RwLock<Entries<V>>,
}

struct Entries<V> {
    values: HashMap<String, (Instant, V)>,
    // May hold stale slots for keys that were overwritten
    order: VecDeque<(String, Instant)>,
}

impl<V> Entries<V> {
    /// Drop the oldest queued slot, removing its value unless it was overwritten
    fn evict_front(&mut self) -> bool {
        let Some((key, stored_at)) = self.order.pop_front() else {
            return false;
        };
        if self.values.get(&key).is_some_and(|(current, _)| *current == stored_at) {
            self.values.remove(&key);
        }
        true
    }

    fn front_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.order
            .front()
            .is_some_and(|(_, stored_at)| now.duration_since(*stored_at) >= ttl)
    }
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            entries: RwLock::new(Entries {
                values: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Fresh value for `key`, if any
    pub async fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read().await;
        entries
            .values
            .get(key)
            .filter(|(stored_at, _)| stored_at.elapsed() < self.ttl)
            .map(|(_, value)| value.clone())
    }

    pub async fn insert(&self, key: String, value: V) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        while entries.front_expired(now, self.ttl) {
            entries.evict_front();
        }
        while entries.values.len() >= self.capacity && !entries.values.contains_key(&key) {
            if !entries.evict_front() {
                break;
            }
        }

        entries.order.push_back((key.clone(), now));
        entries.values.insert(key, (now, value));

        // Overwrites leave stale slots behind; rebuild once they dominate
        if entries.order.len() > self.capacity * 2 {
            let mut live: Vec<(String, Instant)> = entries
                .values
                .iter()
                .map(|(key, (stored_at, _))| (key.clone(), *stored_at))
                .collect();
            live.sort_by_key(|(_, stored_at)| *stored_at);
            entries.order = live.into();
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.read().await.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_fresh_values() {
        let cache = TtlCache::new(Duration::from_secs(60), 8);
        cache.insert("28.6139,77.2090".to_string(), 42).await;

        assert_eq!(cache.get("28.6139,77.2090").await, Some(42));
        assert_eq!(cache.get("19.0760,72.8777").await, None);
    }

    #[tokio::test]
    async fn test_expired_values_are_dropped() {
        let cache = TtlCache::new(Duration::from_millis(10), 8);
        cache.insert("key".to_string(), "value".to_string()).await;

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(cache.get("key").await, None);

        cache.insert("other".to_string(), "fresh".to_string()).await;
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_oldest_entries_are_evicted_at_capacity() {
        let cache = TtlCache::new(Duration::from_secs(60), 3);
        for i in 0..5 {
            cache.insert(format!("query-{}", i), i).await;
        }

        assert_eq!(cache.len().await, 3);
        assert_eq!(cache.get("query-0").await, None);
        assert_eq!(cache.get("query-1").await, None);
        assert_eq!(cache.get("query-2").await, Some(2));
        assert_eq!(cache.get("query-4").await, Some(4));
    }

    #[tokio::test]
    async fn test_overwriting_a_key_keeps_its_neighbours() {
        let cache = TtlCache::new(Duration::from_secs(60), 2);
        cache.insert("a".to_string(), 1).await;
        cache.insert("b".to_string(), 2).await;
        for value in 0..10 {
            cache.insert("b".to_string(), value).await;
        }

        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.get("a").await, Some(1));
        assert_eq!(cache.get("b").await, Some(9));
    }
}
