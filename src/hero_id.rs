//! Hero identifier module.
//!
//! Provides the `HeroId` type. Datasets mix numeric and string ids, so
//! every id is normalized to its string form on the way in and compared
//! as a string.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Normalized hero identifier.
///
/// `1` and `"1"` produce the same `HeroId`. Uses `Arc<str>` so cloning a
/// hero (for search results) never copies the id text.
///
/// # Examples
///
/// ```rust
/// use herodex::HeroId;
///
/// let a: HeroId = 1.into();
/// let b: HeroId = "1".into();
/// assert_eq!(a, b);
/// assert_eq!(a.as_number(), Some(1.0));
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct HeroId(Arc<str>);

impl HeroId {
    /// Create a `HeroId` from its string form.
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the normalized string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if its string form is a number.
    ///
    /// Used for the final ordering of search results. Ids that are not
    /// numeric yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        self.0.trim().parse::<f64>().ok().filter(|n| n.is_finite())
    }
}

impl Serialize for HeroId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Integer ids go back out as JSON numbers.
        match self.0.parse::<i64>() {
            Ok(n) if n.to_string() == *self.0 => serializer.serialize_i64(n),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

struct HeroIdVisitor;

impl<'de> Visitor<'de> for HeroIdVisitor {
    type Value = HeroId;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("an integer or string hero id")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<HeroId, E> {
        Ok(HeroId::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<HeroId, E> {
        Ok(HeroId::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<HeroId, E> {
        Ok(HeroId::from(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<HeroId, E> {
        Ok(HeroId::new(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<HeroId, E> {
        Ok(HeroId::from(v))
    }
}

impl<'de> Deserialize<'de> for HeroId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(HeroIdVisitor)
    }
}

impl From<&str> for HeroId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for HeroId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl From<i64> for HeroId {
    fn from(n: i64) -> Self {
        Self::from(n.to_string())
    }
}

impl From<i32> for HeroId {
    fn from(n: i32) -> Self {
        Self::from(n.to_string())
    }
}

impl From<u64> for HeroId {
    fn from(n: u64) -> Self {
        Self::from(n.to_string())
    }
}

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
