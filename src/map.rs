//! Ordered replacement map.
//!
//! [`ReplacementMap`] wraps an [`IndexMap`] from key bytes to their escape
//! sequence. Entries keep the order in which keys were first seen in the
//! document, so substitution order and report line order are stable from run
//! to run.
//!
//! ## Examples
//!
//! ```rust
//! use keyescape::ReplacementMap;
//!
//! let map = ReplacementMap::from_keys(["name", "id"]);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("id"), Some("\\u0069\\u0064"));
//! let keys: Vec<_> = map.keys().collect();
//! assert_eq!(keys, vec![&b"name"[..], &b"id"[..]]);
//! ```

use crate::encode::encode;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered map of original key bytes to their Unicode escape sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplacementMap(IndexMap<Vec<u8>, String>);

impl ReplacementMap {
    /// Creates an empty `ReplacementMap`.
    #[must_use]
    pub fn new() -> Self {
        ReplacementMap(IndexMap::new())
    }

    /// Builds a map whose values are freshly computed encodings of each key.
    ///
    /// Duplicate keys keep the position of their first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyescape::ReplacementMap;
    ///
    /// let map = ReplacementMap::from_keys(["a", "b", "a"]);
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("a"), Some("\\u0061"));
    /// ```
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let mut map = ReplacementMap::new();
        for key in keys {
            map.insert_key(key.as_ref());
        }
        map
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is overwritten in
    /// place and the old value is returned.
    pub fn insert(&mut self, key: Vec<u8>, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Inserts `key` mapped to its own encoding, unless already present.
    ///
    /// Returns `true` if the key was new.
    pub fn insert_key(&mut self, key: &[u8]) -> bool {
        if self.0.contains_key(key) {
            return false;
        }
        self.0.insert(key.to_vec(), encode(key));
        true
    }

    /// Returns the escape sequence stored for `key`.
    #[must_use]
    pub fn get<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> Option<&str> {
        self.0.get(key.as_ref()).map(String::as_str)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        self.0.contains_key(key.as_ref())
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the original keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.0.keys().map(Vec::as_slice)
    }

    /// Returns an iterator over `(key, escape)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_slice(), v.as_str()))
    }
}

// Keys are written as (lossy) UTF-8 strings so the map is usable as a JSON object.
impl Serialize for ReplacementMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(&String::from_utf8_lossy(key), value)?;
        }
        map.end()
    }
}
