//! Cache Store Module
//!
//! The expiring key/value medium beneath the cache façade: the [`Store`]
//! contract and its in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheEntry, CacheKey, Ttl};
use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;

// == Store Trait ==
/// Expiring key/value storage.
///
/// Expired entries must behave as absent to every read, whether or not they
/// have been physically removed yet.
pub trait Store<V> {
    /// Returns true if a non-expired entry exists for `key`.
    fn has(&self, key: &CacheKey) -> bool;

    /// Returns the value stored for `key`, or [`StoreError::NotFound`].
    fn get(&self, key: &CacheKey) -> Result<V, StoreError>;

    /// Inserts or overwrites the entry for `key`.
    fn set(&mut self, key: CacheKey, value: V, ttl: Option<Ttl>) -> Result<(), StoreError>;

    /// Removes the entry for `key`. Removing an absent key succeeds.
    fn delete(&mut self, key: &CacheKey) -> Result<(), StoreError>;

    /// Creates a new, empty store configured like this one.
    fn empty(&self) -> Result<Self, StoreError>
    where
        Self: Sized;

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Physically drops expired entries, returning how many were removed.
    fn purge_expired(&mut self) -> usize {
        0
    }

    /// Returns true if the store holds no live entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// == Memory Store ==
/// In-memory store backed by a HashMap.
#[derive(Debug)]
pub struct MemoryStore<V> {
    /// Key-value storage
    entries: HashMap<CacheKey, CacheEntry<V>>,
    /// Time source for expiration
    clock: Arc<dyn Clock>,
    /// Capacity reserved up front, reused by `empty`
    initial_capacity: usize,
}

impl<V> MemoryStore<V> {
    // == Constructors ==
    /// Creates an empty store using the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store using the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_capacity(0, clock)
    }

    /// Creates an empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            clock,
            initial_capacity: capacity,
        }
    }

    fn live_entry(&self, key: &CacheKey) -> Option<&CacheEntry<V>> {
        let now = self.clock.now();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
    }
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Store<V> for MemoryStore<V> {
    fn has(&self, key: &CacheKey) -> bool {
        self.live_entry(key).is_some()
    }

    fn get(&self, key: &CacheKey) -> Result<V, StoreError> {
        self.live_entry(key)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn set(&mut self, key: CacheKey, value: V, ttl: Option<Ttl>) -> Result<(), StoreError> {
        if !self.entries.contains_key(&key) {
            self.entries.try_reserve(1).map_err(StoreError::storage)?;
        }

        let entry = CacheEntry::new(value, ttl, self.clock.now());
        self.entries.insert(key, entry);
        Ok(())
    }

    fn delete(&mut self, key: &CacheKey) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn empty(&self) -> Result<Self, StoreError> {
        let mut entries = HashMap::new();
        entries
            .try_reserve(self.initial_capacity)
            .map_err(StoreError::storage)?;

        Ok(Self {
            entries,
            clock: Arc::clone(&self.clock),
            initial_capacity: self.initial_capacity,
        })
    }

    fn len(&self) -> usize {
        let now = self.clock.now();
        self.entries
            .values()
            .filter(|entry| !entry.is_expired_at(now))
            .count()
    }

    // == Purge Expired ==
    fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }
}
