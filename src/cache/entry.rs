//! Cache Entry Module
//!
//! A cached response body with its absolute expiration time.

use chrono::{DateTime, Duration, Utc};

// == Cache Entry ==
/// Raw response bytes plus the window during which they may be served.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Response body before decoding
    pub payload: Vec<u8>,
    /// When the payload was stored
    pub stored_at: DateTime<Utc>,
    /// `stored_at + ttl`
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry expiring `ttl_seconds` from now.
    pub fn new(payload: Vec<u8>, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        let expires_at = Duration::try_seconds(ttl)
            .and_then(|d| now.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            payload,
            stored_at: now,
            expires_at,
        }
    }

    // == Is Expired ==
    /// An entry is valid iff `now < expires_at`.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration as StdDuration;

    #[test]
    fn test_entry_creation_with_ttl() {
        let entry = CacheEntry::new(b"payload".to_vec(), 60);

        assert_eq!(entry.payload, b"payload");
        assert_eq!((entry.expires_at - entry.stored_at).num_seconds(), 60);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(b"payload".to_vec(), 1);

        assert!(!entry.is_expired());

        sleep(StdDuration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Utc::now();
        let entry = CacheEntry {
            payload: Vec::new(),
            stored_at: now,
            expires_at: now,
        };

        // now == expires_at is already stale
        assert!(entry.is_expired());
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let entry = CacheEntry::new(Vec::new(), u64::MAX);
        assert!(!entry.is_expired());
    }
}
