//! SearchCache expiry and overwrite semantics, driven by a manual clock.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use bookgate::{BookRecord, Clock, SearchCache, SearchResult};

const TTL: Duration = Duration::from_millis(60_000);

struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Instant::now()),
        })
    }

    fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

fn sample_result(id: &str) -> SearchResult {
    SearchResult {
        total_items: 1,
        items: vec![BookRecord {
            id: id.to_string(),
            title: "Clean Code".to_string(),
            authors: vec!["Robert C. Martin".to_string()],
            publisher: "Prentice Hall".to_string(),
            published_date: "2008".to_string(),
            page_count: 464,
            description: None,
            thumbnail: None,
        }],
    }
}

#[test]
fn fresh_entry_is_returned_unchanged() {
    let cache = SearchCache::new(TTL);
    cache.put("k".to_string(), sample_result("a"));
    assert_eq!(cache.get("k"), Some(sample_result("a")));
}

#[test]
fn missing_key_is_a_miss() {
    let cache = SearchCache::new(TTL);
    assert!(cache.get("absent").is_none());
}

#[test]
fn entry_valid_just_under_ttl() {
    let clock = ManualClock::new();
    let cache = SearchCache::with_clock(TTL, clock.clone());
    cache.put("k".to_string(), sample_result("a"));
    clock.advance(TTL - Duration::from_millis(1));
    assert!(cache.get("k").is_some());
}

#[test]
fn entry_expired_at_exactly_ttl() {
    let clock = ManualClock::new();
    let cache = SearchCache::with_clock(TTL, clock.clone());
    cache.put("k".to_string(), sample_result("a"));
    clock.advance(TTL);
    assert!(cache.get("k").is_none());
}

#[test]
fn expired_entry_not_removed_by_get() {
    let clock = ManualClock::new();
    let cache = SearchCache::with_clock(TTL, clock.clone());
    cache.put("k".to_string(), sample_result("a"));
    clock.advance(TTL + Duration::from_secs(1));

    assert!(cache.get("k").is_none());
    // lazy eviction: the stale entry is still stored
    assert_eq!(cache.len(), 1);
}

#[test]
fn put_overwrites_expired_entry() {
    let clock = ManualClock::new();
    let cache = SearchCache::with_clock(TTL, clock.clone());
    cache.put("k".to_string(), sample_result("old"));
    clock.advance(TTL + Duration::from_secs(1));

    cache.put("k".to_string(), sample_result("new"));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("k"), Some(sample_result("new")));
}

#[test]
fn keys_are_independent() {
    let clock = ManualClock::new();
    let cache = SearchCache::with_clock(TTL, clock.clone());
    cache.put("a".to_string(), sample_result("a"));
    clock.advance(Duration::from_secs(30));
    cache.put("b".to_string(), sample_result("b"));
    clock.advance(Duration::from_secs(40));

    // "a" is now 70s old, "b" only 40s
    assert!(cache.get("a").is_none());
    assert!(cache.get("b").is_some());
}

#[test]
fn empty_cache_reports_empty() {
    let cache = SearchCache::new(TTL);
    assert!(cache.is_empty());
    cache.put("k".to_string(), sample_result("a"));
    assert!(!cache.is_empty());
}
