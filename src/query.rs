//! Ordered query parameters.
//!
//! Resource methods build their query by laying the identity keys down first and
//! then applying the caller's overrides on top. Re-inserting an existing key
//! replaces its value but keeps its original position, so the final query reads in
//! the same order as the identity keys followed by whatever new keys the caller added.

use std::fmt;

use serde::ser::{Serialize, SerializeMap as _, Serializer};

/// A scalar query value.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryValue {
    Int(i64),
    Str(String),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Int(value) => write!(f, "{value}"),
            QueryValue::Str(value) => f.write_str(value),
        }
    }
}

impl Serialize for QueryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QueryValue::Int(value) => serializer.serialize_i64(*value),
            QueryValue::Str(value) => serializer.serialize_str(value),
        }
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

/// Insertion-ordered mapping from parameter name to [`QueryValue`].
///
/// ```
/// use api_football_sdk::Query;
///
/// let mut query = Query::new();
/// query.insert("league", 140);
/// query.insert("season", 2021);
/// query.insert("league", 39);
///
/// let keys: Vec<_> = query.iter().map(|(key, _)| key).collect();
/// assert_eq!(keys, ["league", "season"]);
/// assert_eq!(query.get("league").map(ToString::to_string), Some("39".to_owned()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    entries: Vec<(String, QueryValue)>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing in place any value already stored under `key`.
    pub fn insert<K: Into<String>, V: Into<QueryValue>>(&mut self, key: K, value: V) -> &mut Self {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }

        self
    }

    /// Chaining form of [`Query::insert`].
    #[must_use]
    pub fn with<K: Into<String>, V: Into<QueryValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Applies every entry of `overrides` on top of `self`, in order.
    pub fn extend_from(&mut self, overrides: &Query) -> &mut Self {
        for (key, value) in &overrides.entries {
            self.insert(key.as_str(), value.clone());
        }

        self
    }

    /// Identity keys first, caller overrides spread afterwards.
    #[must_use]
    pub fn merged(mut identity: Query, overrides: &Query) -> Query {
        identity.extend_from(overrides);
        identity
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find_map(|(existing, value)| (existing == key).then_some(value))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

impl<K: Into<String>, V: Into<QueryValue>, const N: usize> From<[(K, V); N]> for Query {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
