//! Cache Module
//!
//! Provides the get-or-generate cache façade and the expiring store beneath it.

mod entry;
mod facade;
mod key;
mod source;
mod stats;
mod store;
mod ttl;


// Re-export public types
pub use entry::CacheEntry;
pub use facade::{Cache, CacheId};
pub use key::CacheKey;
pub use source::{Generator, ValueSource};
pub use stats::CacheStats;
pub use store::{MemoryStore, Store};
pub use ttl::{IntoTtl, Ttl};
