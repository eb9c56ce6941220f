//! Ordered map type for form records.
//!
//! [`FieldMap`] wraps [`IndexMap`] so records keep the order their fields were
//! written in, which keeps `Debug` output and serialized records predictable.
//!
//! ## Examples
//!
//! ```rust
//! use desi_text::{FieldMap, Value};
//!
//! let mut map = FieldMap::new();
//! map.insert("name".to_string(), Value::from("Rahul Sharma"));
//! map.insert("age".to_string(), Value::from(20));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Rahul Sharma"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of field names to [`Value`](crate::Value)s.
///
/// # Examples
///
/// ```rust
/// use desi_text::{FieldMap, Value};
///
/// let mut map = FieldMap::new();
/// map.insert("state".to_string(), Value::from("Goa"));
/// map.insert("pincode".to_string(), Value::from("403001"));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["state", "pincode"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldMap(IndexMap<String, crate::Value>);

impl FieldMap {
    /// Creates an empty `FieldMap`.
    #[must_use]
    pub fn new() -> Self {
        FieldMap(IndexMap::new())
    }

    /// Creates an empty `FieldMap` with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FieldMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field, returning the previous value if the name was already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desi_text::{FieldMap, Value};
    ///
    /// let mut map = FieldMap::new();
    /// assert!(map.insert("age".to_string(), Value::from(20)).is_none());
    /// assert!(map.insert("age".to_string(), Value::from(21)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns the value for `key`, or `None` when the field is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the field names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the name/value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for FieldMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        FieldMap(map.into_iter().collect())
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        FieldMap(IndexMap::from_iter(iter))
    }
}
