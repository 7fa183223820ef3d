//! In-memory response cache with TTL expiry and single-flight fetching.
//!
//! Entries expire lazily: an expired entry is removed the next time it is
//! read, there is no background sweep. The cache is capacity-bounded; at
//! capacity the oldest entry is evicted after expired entries are dropped.
//!
//! Concurrent fetches for the same key are de-duplicated: callers racing on
//! one key await a per-key gate, so exactly one of them performs the upstream
//! call and the rest read the freshly cached value. This closes the
//! lost-update window where a slow early fetch could overwrite a fresher one.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

struct Entry<T> {
    value: T,
    stored_at: Instant,
}

/// Key-value cache with a single configurable TTL and capacity bound.
pub struct TtlCache<T> {
    ttl: Duration,
    capacity: usize,
    entries: Mutex<HashMap<String, Entry<T>>>,
    /// Per-key gates serializing in-flight fetches.
    flights: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            entries: Mutex::new(HashMap::new()),
            flights: Mutex::new(HashMap::new()),
        }
    }

    /// Fresh hit returns a clone; an expired entry is evicted and misses.
    pub async fn get(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a value, overwriting any previous entry for the key.
    pub async fn insert(&self, key: &str, value: T) {
        let mut entries = self.entries.lock().await;
        if !entries.contains_key(key) && entries.len() >= self.capacity {
            Self::make_room(&mut entries, self.ttl);
        }
        entries.insert(
            key.to_string(),
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop expired entries; if none were expired, evict the oldest.
    fn make_room(entries: &mut HashMap<String, Entry<T>>, ttl: Duration) {
        let before = entries.len();
        entries.retain(|_, e| e.stored_at.elapsed() < ttl);
        if entries.len() < before {
            return;
        }
        let oldest = entries
            .iter()
            .min_by_key(|(_, e)| e.stored_at)
            .map(|(k, _)| k.clone());
        if let Some(key) = oldest {
            entries.remove(&key);
        }
    }

    /// Number of live (stored, possibly expired) entries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    /// Cached read with single-flight fetch on miss.
    ///
    /// Only successful fetches are cached; an `Err` leaves the cache
    /// untouched so the next caller retries upstream.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.get_or_compute(key, move || async move {
            match fetch().await {
                Ok(value) => (Ok(value), true),
                Err(e) => (Err(e), false),
            }
        })
        .await
    }

    /// Single-flight variant where the computation decides cacheability.
    ///
    /// The aggregator uses this to return degraded results to the caller
    /// without pinning them in the cache.
    pub async fn get_or_compute<F, Fut, R>(&self, key: &str, compute: F) -> R
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = (R, bool)>,
        R: CacheOutcome<T>,
    {
        if let Some(value) = self.get(key).await {
            return R::from_cached(value);
        }

        let gate = {
            let mut flights = self.flights.lock().await;
            flights
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        let guard = gate.lock().await;

        // A concurrent flight may have filled the cache while we waited.
        let result = if let Some(value) = self.get(key).await {
            R::from_cached(value)
        } else {
            let (result, cacheable) = compute().await;
            if cacheable
                && let Some(value) = result.cache_value()
            {
                self.insert(key, value).await;
            }
            result
        };

        drop(guard);
        drop(gate);
        let mut flights = self.flights.lock().await;
        if let Some(g) = flights.get(key)
            && Arc::strong_count(g) == 1
        {
            flights.remove(key);
        }
        result
    }
}

/// Bridges computation results back to cacheable values.
///
/// Implemented for the bare value and for `Result<T, E>` so both
/// `get_or_compute` and `get_or_fetch` share the flight logic.
pub trait CacheOutcome<T> {
    fn from_cached(value: T) -> Self;
    fn cache_value(&self) -> Option<T>;
}

impl<T: Clone> CacheOutcome<T> for T {
    fn from_cached(value: T) -> Self {
        value
    }

    fn cache_value(&self) -> Option<T> {
        Some(self.clone())
    }
}

impl<T: Clone, E> CacheOutcome<T> for Result<T, E> {
    fn from_cached(value: T) -> Self {
        Ok(value)
    }

    fn cache_value(&self) -> Option<T> {
        self.as_ref().ok().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_hit_within_ttl() {
        let cache = TtlCache::new(Duration::from_secs(60), 16);
        cache.insert("k", 42u32).await;
        assert_eq!(cache.get("k").await, Some(42));
    }

    #[tokio::test]
    async fn test_expired_entry_misses_and_evicts() {
        let cache = TtlCache::new(Duration::from_millis(20), 16);
        cache.insert("k", 1u32).await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(cache.get("k").await, None);
        // Lazy eviction removed the stale entry on read
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_overwrite_refreshes() {
        let cache = TtlCache::new(Duration::from_secs(60), 16);
        cache.insert("k", 1u32).await;
        cache.insert("k", 2u32).await;
        assert_eq!(cache.get("k").await, Some(2));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest() {
        let cache = TtlCache::new(Duration::from_secs(60), 2);
        cache.insert("a", 1u32).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        cache.insert("b", 2u32).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        cache.insert("c", 3u32).await;

        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.get("a").await, None); // oldest was evicted
        assert_eq!(cache.get("b").await, Some(2));
        assert_eq!(cache.get("c").await, Some(3));
    }

    #[tokio::test]
    async fn test_get_or_fetch_caches_success() {
        let cache = TtlCache::new(Duration::from_secs(60), 16);
        let result: Result<u32, &str> = cache.get_or_fetch("k", || async { Ok(7) }).await;
        assert_eq!(result, Ok(7));
        assert_eq!(cache.get("k").await, Some(7));
    }

    #[tokio::test]
    async fn test_get_or_fetch_does_not_cache_error() {
        let cache = TtlCache::new(Duration::from_secs(60), 16);
        let result: Result<u32, &str> = cache.get_or_fetch("k", || async { Err("down") }).await;
        assert_eq!(result, Err("down"));
        assert_eq!(cache.get("k").await, None);

        // Next caller retries and can succeed
        let result: Result<u32, &str> = cache.get_or_fetch("k", || async { Ok(9) }).await;
        assert_eq!(result, Ok(9));
    }

    #[tokio::test]
    async fn test_single_flight_deduplicates_concurrent_fetches() {
        let cache = Arc::new(TtlCache::new(Duration::from_secs(60), 16));
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_fetch::<_, _, ()>("k", || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(20)).await;
                        Ok(11u32)
                    })
                    .await
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap(), Ok(11));
        }
        // All eight callers were served by one upstream call
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_get_or_compute_skips_cache_when_not_cacheable() {
        let cache = TtlCache::new(Duration::from_secs(60), 16);
        let value: u32 = cache.get_or_compute("k", || async { (3, false) }).await;
        assert_eq!(value, 3);
        assert_eq!(cache.get("k").await, None);

        let value: u32 = cache.get_or_compute("k", || async { (4, true) }).await;
        assert_eq!(value, 4);
        assert_eq!(cache.get("k").await, Some(4));
    }
}
