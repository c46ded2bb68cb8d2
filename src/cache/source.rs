//! Value Source Module
//!
//! What to store on a cache miss: a literal value, or a generator that
//! computes one.

use std::fmt;

use crate::cache::{CacheKey, Ttl};
use crate::error::BoxError;

/// Deferred computation invoked on a miss with the key and effective TTL.
pub type Generator<'a, V> =
    Box<dyn FnOnce(&CacheKey, Option<Ttl>) -> Result<V, BoxError> + 'a>;

// == Value Source ==
/// Where the value for a missing key comes from.
pub enum ValueSource<'a, V> {
    /// Stored as is, nothing is invoked
    Literal(V),
    /// Invoked once to produce the value
    Generator(Generator<'a, V>),
}

impl<'a, V> ValueSource<'a, V> {
    /// A literal value to cache on a miss.
    pub fn literal(value: V) -> Self {
        ValueSource::Literal(value)
    }

    /// A fallible generator receiving the key and the effective TTL.
    ///
    /// # Example
    /// ```
    /// use expiring_cache::{Cache, ValueSource};
    ///
    /// let cache: Cache<String> = Cache::new();
    /// let value = cache
    ///     .get(
    ///         "greeting",
    ///         ValueSource::generator(|key, _ttl| Ok::<_, std::io::Error>(format!("hello {}", key))),
    ///     )
    ///     .unwrap();
    /// assert_eq!(value, "hello greeting");
    /// ```
    pub fn generator<F, E>(generate: F) -> Self
    where
        F: FnOnce(&CacheKey, Option<Ttl>) -> Result<V, E> + 'a,
        E: Into<BoxError>,
    {
        ValueSource::Generator(Box::new(move |key: &CacheKey, ttl: Option<Ttl>| {
            generate(key, ttl).map_err(Into::into)
        }))
    }

    /// An infallible generator that ignores the key and TTL.
    pub fn from_fn<F>(generate: F) -> Self
    where
        F: FnOnce() -> V + 'a,
    {
        ValueSource::Generator(Box::new(move |_: &CacheKey, _: Option<Ttl>| {
            Ok::<V, BoxError>(generate())
        }))
    }

    /// Returns true if resolving this source invokes code.
    pub fn is_generator(&self) -> bool {
        matches!(self, ValueSource::Generator(_))
    }

    // == Resolve ==
    /// Produces the value, invoking the generator if there is one.
    pub(crate) fn resolve(self, key: &CacheKey, ttl: Option<Ttl>) -> Result<V, BoxError> {
        match self {
            ValueSource::Literal(value) => Ok(value),
            ValueSource::Generator(generate) => generate(key, ttl),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for ValueSource<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            ValueSource::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_literal_resolves_to_value() {
        let source = ValueSource::literal(7);
        assert!(!source.is_generator());
        assert_eq!(source.resolve(&CacheKey::from("k"), None).unwrap(), 7);
    }

    #[test]
    fn test_generator_receives_key_and_ttl() {
        let seen = Cell::new(None);
        let source = ValueSource::generator(|key: &CacheKey, ttl| {
            seen.set(Some((key.to_string(), ttl)));
            Ok::<_, BoxError>(1)
        });

        assert!(source.is_generator());
        let value = source
            .resolve(&CacheKey::from("k"), Some(Ttl::from_secs(5)))
            .unwrap();

        assert_eq!(value, 1);
        assert_eq!(seen.take(), Some(("k".to_string(), Some(Ttl::from_secs(5)))));
    }

    #[test]
    fn test_generator_failure_is_boxed() {
        let source: ValueSource<'_, i32> =
            ValueSource::generator(|_, _| Err("backend unavailable"));

        let err = source.resolve(&CacheKey::from("k"), None).unwrap_err();
        assert_eq!(err.to_string(), "backend unavailable");
    }

    #[test]
    fn test_from_fn() {
        let calls = Cell::new(0);
        let source = ValueSource::from_fn(|| {
            calls.set(calls.get() + 1);
            "made"
        });

        assert_eq!(source.resolve(&CacheKey::from("k"), None).unwrap(), "made");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_debug_hides_generator() {
        let source: ValueSource<'_, i32> = ValueSource::from_fn(|| 1);
        assert_eq!(format!("{:?}", source), "Generator(..)");
        assert_eq!(format!("{:?}", ValueSource::literal(3)), "Literal(3)");
    }
}
