// Dweve DelimRec - Delimited Record Reader
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Record: an ordered mapping from field name to [`Value`].
//!
//! Records produced by the reader keep header order. Equality and hashing
//! are structural and ignore order, so two records holding the same fields
//! are interchangeable as map keys or set members.
//!
//! ```rust
//! use delimrec::{Record, Value};
//!
//! let a: Record = [("id", "1"), ("name", "Alice")].into_iter().collect();
//! let b: Record = [("name", "Alice"), ("id", "1")].into_iter().collect();
//!
//! assert_eq!(a, b);
//! assert_eq!(a.keys().collect::<Vec<_>>(), vec!["id", "name"]);
//! assert_eq!(a.get("name"), Some(&Value::from("Alice")));
//! ```

use crate::value::Value;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Ordered field-name → value mapping.
///
/// Keys are unique. Writing an existing key replaces its value in place, so
/// the key keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|(k, _)| k == key)
    }

    /// Get a field value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Get a field value as a string slice, if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Get a mutable reference to a field value.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.fields
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Whether the record has a field named `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Set a field, returning the previous value if the key existed.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.fields[idx].1, value)),
            None => {
                self.fields.push((key, value));
                None
            }
        }
    }

    /// Remove a field, returning its value. Remaining fields keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.position(key).map(|idx| self.fields.remove(idx).1)
    }

    /// Copy every field of `other` into this record; `other` wins on conflicts.
    pub fn merge(&mut self, other: Record) {
        for (key, value) in other.fields {
            self.set(key, value);
        }
    }

    /// Build a new record from this one with `updates` applied on top.
    ///
    /// ```rust
    /// use delimrec::Record;
    ///
    /// let base: Record = [("id", "1"), ("status", "new")].into_iter().collect();
    /// let next = base.derive([("status", "done")]);
    ///
    /// assert_eq!(base.get_str("status"), Some("new"));
    /// assert_eq!(next.get_str("status"), Some("done"));
    /// assert_eq!(next.get_str("id"), Some("1"));
    /// ```
    pub fn derive<K, V, I>(&self, updates: I) -> Record
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut derived = self.clone();
        for (key, value) in updates {
            derived.set(key, value);
        }
        derived
    }

    /// Iterate field names in record order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate values in record order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, v)| v)
    }

    /// Iterate `(name, value)` pairs in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Structural equality: same key set, equal value per key.
    ///
    /// Field order is ignored. `Value::Null` only matches `Value::Null`.
    pub fn content_eq(&self, other: &Record) -> bool {
        self.len() == other.len()
            && self
                .fields
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| o == v))
    }

    /// Order-independent content hash: XOR of `hash(key) ^ hash(value)` per field.
    pub fn content_hash(&self) -> u64 {
        self.fields.iter().fold(0u64, |acc, (k, v)| {
            acc ^ (stable_hash(k.as_str()) ^ stable_hash(v))
        })
    }
}

fn stable_hash<T: Hash + ?Sized>(item: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    item.hash(&mut hasher);
    hasher.finish()
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.content_eq(other)
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash());
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.set(key, value);
        }
        record
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Record {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
