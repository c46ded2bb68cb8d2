//! Cache Façade Module
//!
//! Get-or-generate semantics on top of an expiring [`Store`], with TTL
//! normalization and uniform error classification.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, CacheStats, IntoTtl, MemoryStore, Store, Ttl, ValueSource};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::{CacheError, Operation, Result, StoreError};

static NEXT_CACHE_ID: AtomicU64 = AtomicU64::new(1);

// == Cache Id ==
/// Process-unique identity of a cache instance, reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheId(u64);

impl CacheId {
    pub(crate) fn next() -> Self {
        Self(NEXT_CACHE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric identifier.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CacheId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// == Cache ==
/// Thread-safe get-or-generate cache.
///
/// A single lock guards the whole store: lookups check presence and read
/// the value under one read guard, and [`clear`](Cache::clear) swaps in a
/// fresh store under the write guard. Generators run with no lock held, so
/// two threads missing the same key at once may both generate.
///
/// # Example
/// ```
/// use expiring_cache::{Cache, ValueSource};
///
/// let cache: Cache<u32> = Cache::new();
///
/// let first = cache.get_with_ttl("answer", ValueSource::from_fn(|| 42), 60).unwrap();
/// let second = cache.get("answer", ValueSource::from_fn(|| 0)).unwrap();
///
/// assert_eq!(first, 42);
/// assert_eq!(second, 42);
/// ```
#[derive(Debug)]
pub struct Cache<V, S = MemoryStore<V>> {
    /// Identity reported in storage errors
    id: CacheId,
    /// Expiring storage, replaced wholesale by `clear`
    store: RwLock<S>,
    /// Lookup statistics
    stats: Mutex<CacheStats>,
    /// TTL applied when a write supplies none
    default_ttl: Option<Ttl>,
    _value: PhantomData<fn() -> V>,
}

impl<V: Clone> Cache<V, MemoryStore<V>> {
    // == Constructors ==
    /// Creates a memory-backed cache using the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a memory-backed cache reading time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_store(MemoryStore::with_clock(clock))
    }

    /// Creates a memory-backed cache from configuration.
    pub fn from_config(config: &Config) -> Self {
        let store = MemoryStore::with_capacity(config.initial_capacity, Arc::new(SystemClock));
        Self::with_store(store).with_default_ttl(config.default_ttl.map(Ttl::from_secs))
    }
}

impl<V: Clone> Default for Cache<V, MemoryStore<V>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, S: Store<V>> Cache<V, S> {
    /// Creates a cache on top of an arbitrary store.
    pub fn with_store(store: S) -> Self {
        Self {
            id: CacheId::next(),
            store: RwLock::new(store),
            stats: Mutex::new(CacheStats::new()),
            default_ttl: None,
            _value: PhantomData,
        }
    }

    /// Sets the TTL applied to writes that do not specify one.
    pub fn with_default_ttl(mut self, ttl: Option<Ttl>) -> Self {
        self.default_ttl = ttl;
        self
    }

    // == Accessors ==
    /// Returns this cache's process-unique identity.
    pub fn id(&self) -> CacheId {
        self.id
    }

    /// Returns the TTL applied to writes that do not specify one.
    pub fn default_ttl(&self) -> Option<Ttl> {
        self.default_ttl
    }

    // == Get ==
    /// Returns the cached value for `key`, or resolves `source` and caches
    /// the result.
    ///
    /// A generator is invoked exactly once on a miss and never on a hit. A
    /// literal is stored as is. Generator failures are reported as
    /// [`CacheError::Generation`].
    pub fn get(&self, key: impl Into<CacheKey>, source: ValueSource<'_, V>) -> Result<V> {
        self.get_or_generate(key.into(), source, None)
    }

    /// Like [`get`](Cache::get), storing a generated value with `ttl`.
    ///
    /// The TTL is normalized before the store is consulted.
    pub fn get_with_ttl(
        &self,
        key: impl Into<CacheKey>,
        source: ValueSource<'_, V>,
        ttl: impl IntoTtl,
    ) -> Result<V> {
        let ttl = ttl.into_ttl()?;
        self.get_or_generate(key.into(), source, Some(ttl))
    }

    fn get_or_generate(
        &self,
        key: CacheKey,
        source: ValueSource<'_, V>,
        ttl: Option<Ttl>,
    ) -> Result<V> {
        if let Some(value) = self.lookup(&key)? {
            self.stats.lock().record_hit();
            debug!("Cache hit for key '{}'", key);
            return Ok(value);
        }
        self.stats.lock().record_miss();

        let ttl = ttl.or(self.default_ttl);
        if source.is_generator() {
            debug!("Cache miss for key '{}', invoking generator", key);
            self.stats.lock().record_generation();
        } else {
            debug!("Cache miss for key '{}', storing literal value", key);
        }

        let value = source.resolve(&key, ttl).map_err(|cause| {
            warn!("Generator failed for key '{}': {}", key, cause);
            CacheError::Generation {
                key: key.to_string(),
                source: cause,
            }
        })?;

        self.write(Operation::Get, key, value.clone(), ttl)?;
        Ok(value)
    }

    // == Fetch ==
    /// Returns the cached value for `key` without generating anything.
    ///
    /// A missing or expired key yields [`CacheError::NotFound`].
    pub fn fetch(&self, key: impl Into<CacheKey>) -> Result<V> {
        let key = key.into();
        match self.lookup(&key)? {
            Some(value) => {
                self.stats.lock().record_hit();
                Ok(value)
            }
            None => {
                self.stats.lock().record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key` with no TTL of its own.
    ///
    /// The cache-wide default TTL applies if one is configured.
    pub fn set(&self, key: impl Into<CacheKey>, value: V) -> Result<()> {
        let key = key.into();
        self.write(Operation::Set, key, value, None)
    }

    /// Stores `value` under `key` for `ttl`.
    ///
    /// An invalid TTL fails with [`CacheError::InvalidArgument`] and leaves
    /// the store untouched.
    pub fn set_with_ttl(&self, key: impl Into<CacheKey>, value: V, ttl: impl IntoTtl) -> Result<()> {
        let key = key.into();
        let ttl = ttl.into_ttl()?;
        self.write(Operation::Set, key, value, Some(ttl))
    }

    // == Delete ==
    /// Removes `key`. Deleting an absent key succeeds.
    pub fn delete(&self, key: impl Into<CacheKey>) -> Result<()> {
        let key = key.into();
        self.store
            .write()
            .delete(&key)
            .map_err(|err| self.classify(Operation::Delete, err))?;
        debug!("Deleted key '{}'", key);
        Ok(())
    }

    // == Clear ==
    /// Replaces the store with an empty one.
    ///
    /// The swap happens under the write lock, so no reader can observe a
    /// partially cleared cache.
    pub fn clear(&self) -> Result<()> {
        let mut store = self.store.write();
        let fresh = store
            .empty()
            .map_err(|err| self.classify(Operation::Clear, err))?;
        let dropped = store.len();
        *store = fresh;

        info!("Cache {} cleared, dropped {} entries", self.id, dropped);
        Ok(())
    }

    // == Has ==
    /// Returns true if a fresh value is cached for `key`.
    pub fn has(&self, key: impl Into<CacheKey>) -> bool {
        self.store.read().has(&key.into())
    }

    // == Purge Expired ==
    /// Physically removes expired entries. Returns the number removed.
    pub fn purge_expired(&self) -> usize {
        let removed = self.store.write().purge_expired();
        self.stats.lock().record_purged(removed);
        removed
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Returns true if no live entries remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.lock().clone();
        stats.set_total_entries(self.len());
        stats
    }

    fn lookup(&self, key: &CacheKey) -> Result<Option<V>> {
        let store = self.store.read();
        if !store.has(key) {
            return Ok(None);
        }

        match store.get(key) {
            Ok(value) => Ok(Some(value)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(err) => Err(self.classify(Operation::Get, err)),
        }
    }

    fn write(&self, operation: Operation, key: CacheKey, value: V, ttl: Option<Ttl>) -> Result<()> {
        let ttl = ttl.or(self.default_ttl);
        self.store
            .write()
            .set(key, value, ttl)
            .map_err(|err| self.classify(operation, err))
    }

    fn classify(&self, operation: Operation, err: StoreError) -> CacheError {
        let err = CacheError::classify(operation, self.id, err);
        if matches!(err, CacheError::Storage { .. }) {
            warn!("Cache {} failed to {}: {}", self.id, operation, err);
        }
        err
    }
}
