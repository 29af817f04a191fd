use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Time-bounded memoization of fetch results, kept outside the scoring core.
/// Expiry is checked against a caller-supplied `now` internally, so tests can
/// drive the clock without sleeping.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, CacheEntry<V>>,
}

struct CacheEntry<V> {
    data: V,
    expires_at: Instant,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        TtlCache {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        self.entries
            .get(key)
            .filter(|e| now < e.expires_at)
            .map(|e| e.data.clone())
    }

    fn insert_at(&mut self, key: K, value: V, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                data: value,
                expires_at: now + self.ttl,
            },
        );
    }
}
