//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TTL in seconds for writes that do not specify one, None = indefinite
    pub default_ttl: Option<u64>,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Number of entries to reserve room for up front
    pub initial_capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds (default: unset)
    /// - `CACHE_CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    /// - `CACHE_INITIAL_CAPACITY` - Entries reserved up front (default: 0)
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl: env::var("CACHE_DEFAULT_TTL")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .or(defaults.default_ttl),
            cleanup_interval: env::var("CACHE_CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.cleanup_interval),
            initial_capacity: env::var("CACHE_INITIAL_CAPACITY")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.initial_capacity),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: None,
            cleanup_interval: 1,
            initial_capacity: 0,
        }
    }
}
