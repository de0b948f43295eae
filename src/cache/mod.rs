//! Cache Module
//!
//! In-memory response cache with TTL expiration and LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;

/// Cache store handle shared between the dispatcher and its owner.
///
/// Lookups take the write lock since they update LRU order and stats.
pub type SharedCache = Arc<RwLock<CacheStore>>;

/// Wraps a store in a `SharedCache`.
pub fn shared(store: CacheStore) -> SharedCache {
    Arc::new(RwLock::new(store))
}
