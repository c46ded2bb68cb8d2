//! Cache Key Module
//!
//! Canonical string identity for cache keys.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

// == Cache Key ==
/// Canonical key under which a value is cached.
///
/// Scalars are reduced to their string form, so `CacheKey::from(7)` and
/// `CacheKey::from("7")` address the same entry. Booleans map to `"1"` and
/// `"0"`. Every string is a usable key, including the empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds a key from anything with a canonical string form.
    pub fn from_display(value: &impl fmt::Display) -> Self {
        Self(value.to_string())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CacheKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for CacheKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CacheKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for CacheKey {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&CacheKey> for CacheKey {
    fn from(value: &CacheKey) -> Self {
        value.clone()
    }
}

impl From<bool> for CacheKey {
    fn from(value: bool) -> Self {
        Self(if value { "1" } else { "0" }.to_string())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CacheKey {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_integer_and_string_keys_are_equal() {
        assert_eq!(CacheKey::from(42), CacheKey::from("42"));
        assert_eq!(CacheKey::from(42u64), CacheKey::from(42i8));
        assert_eq!(CacheKey::from(-3), CacheKey::from("-3"));
    }

    #[test]
    fn test_bool_keys() {
        assert_eq!(CacheKey::from(true), CacheKey::from(1));
        assert_eq!(CacheKey::from(false), CacheKey::from("0"));
    }

    #[test]
    fn test_from_display() {
        struct UserId(u32);
        impl fmt::Display for UserId {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "user:{}", self.0)
            }
        }

        assert_eq!(CacheKey::from_display(&UserId(9)).as_str(), "user:9");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(CacheKey::from(5), "five");
        assert_eq!(map.get("5"), Some(&"five"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&CacheKey::from(42)).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
