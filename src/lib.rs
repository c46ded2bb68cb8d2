//! Expiring Cache - An in-process get-or-generate cache
//!
//! Callers ask for a value by key; a fresh cached value is returned, otherwise
//! a caller-supplied generator (or literal) provides the value, which is stored
//! with an optional TTL. Expired entries behave as absent on every read.

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheKey, CacheStats, IntoTtl, MemoryStore, Store, Ttl, ValueSource};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::{BoxError, CacheError, Operation, Result, StoreError};
pub use tasks::spawn_cleanup_task;
