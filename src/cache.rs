use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

struct CacheEntry {
    value: Value,
    ttl: Duration,
    deadline: Instant,
}

/// Process-local key/value cache with sliding expiration: every read hit
/// pushes the entry's deadline out to `now + ttl`. Values are stored as
/// JSON so one cache can hold entries of different shapes.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key`, refreshing its expiration.
    /// An entry past its deadline is removed and reported as a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(_) => return None,
        };

        let expired = match entries.get(key) {
            Some(entry) => Instant::now() >= entry.deadline,
            None => return None,
        };
        if expired {
            debug!("cache entry {} expired", key);
            entries.remove(key);
            return None;
        }

        let entry = entries.get_mut(key)?;
        // Sliding window: the read itself extends the entry's lifetime.
        entry.deadline = Instant::now() + entry.ttl;

        match serde_json::from_value(entry.value.clone()) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("cache entry {} did not match requested type: {}", key, e);
                entries.remove(key);
                None
            }
        }
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                warn!("could not serialize cache entry {}: {}", key, e);
                return;
            }
        };

        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.to_string(),
                CacheEntry {
                    value,
                    ttl,
                    deadline: Instant::now() + ttl,
                },
            );
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::thread::sleep;

    #[test]
    fn get_returns_what_was_set() {
        let cache = MemoryCache::new();
        cache.set("ids", &vec![1u64, 2, 3], Duration::from_secs(60));

        assert_eq!(cache.get::<Vec<u64>>("ids"), Some(vec![1, 2, 3]));
        assert_eq!(cache.get::<Vec<u64>>("missing"), None);
    }

    #[test]
    fn entry_expires_after_window_with_no_reads() {
        let cache = MemoryCache::new();
        cache.set("ids", &vec![1u64], Duration::from_millis(100));

        sleep(Duration::from_millis(250));
        assert_eq!(cache.get::<Vec<u64>>("ids"), None);
    }

    #[test]
    fn read_hit_slides_the_deadline() {
        let cache = MemoryCache::new();
        cache.set("ids", &vec![1u64], Duration::from_millis(300));

        // Each read lands inside the window and resets it, so the entry
        // outlives its original deadline.
        sleep(Duration::from_millis(200));
        assert_eq!(cache.get::<Vec<u64>>("ids"), Some(vec![1]));
        sleep(Duration::from_millis(200));
        assert_eq!(cache.get::<Vec<u64>>("ids"), Some(vec![1]));

        sleep(Duration::from_millis(400));
        assert_eq!(cache.get::<Vec<u64>>("ids"), None);
    }

    #[test]
    fn set_replaces_existing_entry() {
        let cache = MemoryCache::new();
        cache.set("ids", &vec![1u64], Duration::from_secs(60));
        cache.set("ids", &vec![2u64], Duration::from_secs(60));

        assert_eq!(cache.get::<Vec<u64>>("ids"), Some(vec![2]));
    }
}
