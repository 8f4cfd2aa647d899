// HeadlineScope - app/cache.rs
//
// Time-bounded, size-bounded read-through cache around any `Fetcher`.
//
// Only successful fetches are stored; an error always goes back to the
// caller uncached, so the next call retries the source. A TTL of zero
// disables caching entirely. Expired bodies are dropped on lookup and swept
// on every insert, and at most `capacity` URLs are held (least recently used
// goes first).

use crate::app::fetch::Fetcher;
use crate::util::constants;
use crate::util::error::FetchError;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Memoises successful fetches per URL for `ttl`.
pub struct CachedFetcher<F> {
    inner: F,
    ttl: Duration,
    entries: Mutex<LruCache<String, CacheEntry>>,
}

struct CacheEntry {
    fetched_at: Instant,
    body: String,
}

impl<F: Fetcher> CachedFetcher<F> {
    /// Cache with the default capacity.
    pub fn new(inner: F, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(constants::CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_capacity(inner, ttl, capacity)
    }

    pub fn with_capacity(inner: F, ttl: Duration, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Drop the cached body for `url` so the next fetch hits the source.
    pub fn invalidate(&self, url: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.pop(url).is_some() {
                tracing::debug!(url, "Cache entry invalidated");
            }
        }
    }

    fn lookup(&self, url: &str) -> Option<String> {
        let mut entries = self.entries.lock().ok()?;
        let age = entries.peek(url)?.fetched_at.elapsed();
        if age >= self.ttl {
            entries.pop(url);
            tracing::debug!(url, age_secs = age.as_secs(), "Cache entry expired");
            return None;
        }
        tracing::debug!(url, age_secs = age.as_secs(), "Cache hit");
        entries.get(url).map(|entry| entry.body.clone())
    }

    fn store(&self, url: &str, body: String) {
        // A poisoned lock only costs us the cache; the body is still good.
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        let expired: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.fetched_at.elapsed() >= self.ttl)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            entries.pop(key);
        }
        if let Some((evicted, _)) = entries.push(
            url.to_string(),
            CacheEntry {
                fetched_at: Instant::now(),
                body,
            },
        ) {
            if evicted != url {
                tracing::debug!(url = %evicted, "Cache entry evicted");
            }
        }
    }
}

impl<F: Fetcher> Fetcher for CachedFetcher<F> {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if self.ttl.is_zero() {
            return self.inner.fetch(url);
        }
        if let Some(body) = self.lookup(url) {
            return Ok(body);
        }

        // The lock is not held across the network call.
        let body = self.inner.fetch(url)?;
        self.store(url, body.clone());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    impl<F> CachedFetcher<F> {
        fn len(&self) -> usize {
            self.entries.lock().unwrap().len()
        }
    }

    /// Counts calls; fails while `fail` is set.
    struct CountingFetcher {
        calls: AtomicUsize,
        fail: std::sync::atomic::AtomicBool,
    }

    impl CountingFetcher {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: std::sync::atomic::AtomicBool::new(false),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Fetcher for CountingFetcher {
        fn fetch(&self, url: &str) -> Result<String, FetchError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail.load(Ordering::SeqCst) {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: 500,
                });
            }
            Ok(format!("{url}#{n}"))
        }
    }

    #[test]
    fn test_hit_within_ttl() {
        let inner = CountingFetcher::new();
        let cache = CachedFetcher::new(&inner, Duration::from_secs(60));
        assert_eq!(cache.fetch("a").unwrap(), "a#1");
        assert_eq!(cache.fetch("a").unwrap(), "a#1");
        assert_eq!(cache.fetch("b").unwrap(), "b#2");
        assert_eq!(inner.calls(), 2);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let inner = CountingFetcher::new();
        let cache = CachedFetcher::new(&inner, Duration::from_secs(60));
        inner.fail.store(true, Ordering::SeqCst);
        assert!(cache.fetch("a").is_err());
        inner.fail.store(false, Ordering::SeqCst);
        assert_eq!(cache.fetch("a").unwrap(), "a#2");
        assert_eq!(cache.fetch("a").unwrap(), "a#2");
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        let inner = CountingFetcher::new();
        let cache = CachedFetcher::new(&inner, Duration::from_secs(60));
        cache.fetch("a").unwrap();
        cache.invalidate("a");
        assert_eq!(cache.fetch("a").unwrap(), "a#2");
    }

    #[test]
    fn test_expired_entry_is_refetched() {
        let inner = CountingFetcher::new();
        let cache = CachedFetcher::new(&inner, Duration::from_millis(20));
        cache.fetch("a").unwrap();
        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.fetch("a").unwrap(), "a#2");
    }

    #[test]
    fn test_expired_entries_are_released() {
        let inner = CountingFetcher::new();
        let cache = CachedFetcher::new(&inner, Duration::from_millis(10));
        for i in 0..20 {
            cache.fetch(&format!("https://example.com/{i}")).unwrap();
        }
        std::thread::sleep(Duration::from_millis(40));
        cache.fetch("https://example.com/fresh").unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_bounds_entries() {
        let inner = CountingFetcher::new();
        let capacity = NonZeroUsize::new(4).unwrap();
        let cache = CachedFetcher::with_capacity(&inner, Duration::from_secs(60), capacity);
        for i in 0..50 {
            cache.fetch(&format!("https://example.com/{i}")).unwrap();
        }
        assert_eq!(cache.len(), 4);

        // Oldest URLs were evicted; the newest are still served from memory.
        assert_eq!(cache.fetch("https://example.com/49").unwrap(), "https://example.com/49#50");
        assert_eq!(cache.fetch("https://example.com/0").unwrap(), "https://example.com/0#51");
    }

    #[test]
    fn test_zero_ttl_disables_cache() {
        let inner = CountingFetcher::new();
        let cache = CachedFetcher::new(&inner, Duration::ZERO);
        cache.fetch("a").unwrap();
        cache.fetch("a").unwrap();
        assert_eq!(inner.calls(), 2);
    }
}
