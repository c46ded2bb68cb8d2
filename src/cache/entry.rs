//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use chrono::{DateTime, TimeDelta, Utc};

use crate::cache::Ttl;

// == Cache Entry ==
/// Represents a single cache entry with its value and expiration.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp, None = no expiration
    pub expires_at: Option<DateTime<Utc>>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stored at `now`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL
    /// * `now` - Current time according to the store's clock
    ///
    /// A TTL too large to be represented as a timestamp leaves the entry
    /// without an expiration.
    pub fn new(value: V, ttl: Option<Ttl>, now: DateTime<Utc>) -> Self {
        let expires_at = ttl.and_then(|ttl| {
            i64::try_from(ttl.as_secs())
                .ok()
                .and_then(TimeDelta::try_seconds)
                .and_then(|delta| now.checked_add_signed(delta))
        });

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// An entry is expired once the current time is greater than or equal
    /// to its expiration time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}
