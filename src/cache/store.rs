//! Cache Store Module
//!
//! Response cache keyed by canonical request URL, bounded by entry count,
//! with lazy TTL expiration and LRU eviction.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Cache Store ==
#[derive(Debug)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
    lru: LruTracker,
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store holding at most `max_entries` responses.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Put ==
    /// Stores `payload` under `key`, expiring `ttl_seconds` from now.
    ///
    /// Overwrites any existing entry for `key` and resets its TTL. A TTL of 0
    /// is refused. Returns whether the payload was stored.
    pub fn put(&mut self, key: &str, payload: Vec<u8>, ttl_seconds: u64) -> bool {
        if ttl_seconds == 0 || self.max_entries == 0 {
            return false;
        }

        if !self.entries.contains_key(key) {
            while self.entries.len() >= self.max_entries {
                let Some(evicted) = self.lru.evict_oldest() else {
                    break;
                };
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(key = %evicted, "evicted least recently used response");
            }
        }

        self.entries
            .insert(key.to_string(), CacheEntry::new(payload, ttl_seconds));
        self.lru.touch(key);
        self.stats.set_total_entries(self.entries.len());
        true
    }

    // == Get ==
    /// Returns the payload for `key` if present and unexpired.
    ///
    /// An expired entry is evicted when observed and counts as a miss.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let payload = entry.payload.clone();
                self.stats.record_hit();
                self.lru.touch(key);
                return Some(payload);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
            debug!(key, "dropped expired response");
        }
        self.stats.record_miss();
        None
    }

    // == Remove ==
    /// Evicts the entry for `key`. Returns whether one existed.
    pub fn remove(&mut self, key: &str) -> bool {
        let existed = self.entries.remove(key).is_some();
        if existed {
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        existed
    }

    // == Reject ==
    /// Evicts the entry for `key` after its payload turned out unusable.
    ///
    /// The `get` that returned it is recounted as a miss.
    pub fn reject(&mut self, key: &str) -> bool {
        let existed = self.remove(key);
        if existed {
            self.stats.revoke_hit();
        }
        existed
    }

    // == Clear ==
    /// Evicts every entry. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.stats.set_total_entries(0);
        dropped
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
