//! TTL Module
//!
//! Time-to-live values and their normalization from caller input.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::error::{CacheError, Result};

// == Ttl ==
/// Validated time-to-live, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Ttl(u64);

impl Ttl {
    /// Creates a TTL of `secs` seconds.
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the TTL in seconds.
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns the TTL as a [`Duration`].
    pub const fn as_duration(&self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

// == Normalization ==
/// Conversion of caller input into a [`Ttl`].
///
/// Fails with [`CacheError::InvalidArgument`] when the input is negative,
/// fractional or not a number.
pub trait IntoTtl {
    /// Normalizes `self` into a TTL.
    fn into_ttl(self) -> Result<Ttl>;
}

impl IntoTtl for Ttl {
    fn into_ttl(self) -> Result<Ttl> {
        Ok(self)
    }
}

impl IntoTtl for u64 {
    fn into_ttl(self) -> Result<Ttl> {
        Ok(Ttl(self))
    }
}

impl IntoTtl for u32 {
    fn into_ttl(self) -> Result<Ttl> {
        Ok(Ttl(u64::from(self)))
    }
}

impl IntoTtl for usize {
    fn into_ttl(self) -> Result<Ttl> {
        u64::try_from(self)
            .map(Ttl)
            .map_err(|_| invalid_ttl(self))
    }
}

impl IntoTtl for i64 {
    fn into_ttl(self) -> Result<Ttl> {
        u64::try_from(self)
            .map(Ttl)
            .map_err(|_| invalid_ttl(self))
    }
}

impl IntoTtl for i32 {
    fn into_ttl(self) -> Result<Ttl> {
        i64::from(self).into_ttl()
    }
}

impl IntoTtl for &str {
    fn into_ttl(self) -> Result<Ttl> {
        self.trim()
            .parse::<i64>()
            .map_err(|_| invalid_ttl(self))?
            .into_ttl()
    }
}

impl IntoTtl for String {
    fn into_ttl(self) -> Result<Ttl> {
        self.as_str().into_ttl()
    }
}

impl IntoTtl for Duration {
    fn into_ttl(self) -> Result<Ttl> {
        if self.subsec_nanos() != 0 {
            return Err(CacheError::InvalidArgument(format!(
                "TTL must be a whole number of seconds, got {:?}",
                self
            )));
        }
        Ok(Ttl(self.as_secs()))
    }
}

fn invalid_ttl(value: impl fmt::Display) -> CacheError {
    CacheError::InvalidArgument(format!(
        "TTL must be a non-negative integer number of seconds, got '{}'",
        value
    ))
}
