//! Time-bounded in-memory cache for normalized search results.
//!
//! [`SearchCache`] holds one [`SearchResult`] per cache key with a fixed
//! TTL. Expiry is lazy: `get` treats stale entries as absent but leaves
//! them in place, and the next `put` for the key overwrites them. The
//! cache is unbounded in entry count — the keyspace (search phrases) stays
//! small relative to process lifetime, so no LRU is needed.
//!
//! Lookups never fail; a miss is a normal outcome, not an error.
//!
//! Time is read through the [`Clock`] trait so tests can drive expiry with
//! a manual clock instead of sleeping through the 60-second TTL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::telemetry;
use crate::types::SearchResult;

/// Default entry lifetime: 60 seconds.
pub const DEFAULT_TTL: Duration = Duration::from_millis(60_000);

/// Source of monotonic time for cache expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock-backed [`Clock`] used outside tests.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct CacheEntry {
    created_at: Instant,
    value: SearchResult,
}

/// In-memory TTL cache keyed by normalized request shape.
///
/// `get` and `put` are short critical sections around a mutex; the fetch
/// between them is deliberately unlocked, so two concurrent requests for
/// the same cold key may both go upstream. That duplicate work is
/// acceptable; serializing unrelated queries to avoid it is not.
pub struct SearchCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl SearchCache {
    /// Create a cache with the given TTL and the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create a cache with an injected clock (used by tests).
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Look up a fresh entry.
    ///
    /// Returns `None` for missing entries and for entries whose age has
    /// reached the TTL. Stale entries are not removed here.
    pub fn get(&self, key: &str) -> Option<SearchResult> {
        let now = self.clock.now();
        let entries = self.entries.lock().expect("cache lock poisoned");
        let hit = entries
            .get(key)
            .filter(|entry| now.duration_since(entry.created_at) < self.ttl)
            .map(|entry| entry.value.clone());
        if hit.is_some() {
            metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
        } else {
            metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
        }
        hit
    }

    /// Insert or overwrite the entry for `key`, stamped with the current time.
    pub fn put(&self, key: String, value: SearchResult) {
        let entry = CacheEntry {
            created_at: self.clock.now(),
            value,
        };
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .insert(key, entry);
    }

    /// Number of stored entries, including stale ones awaiting overwrite.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    /// Whether the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
