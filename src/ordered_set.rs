//! Insertion-ordered deduplicated string set.
//!
//! Scope tracking needs set-speed membership tests without losing the order
//! in which names were first seen — dependency lists and the `local`/`remote`
//! report fields are all first-occurrence ordered. Backed by a `Vec` for
//! iteration order plus a `HashSet` for O(1) lookups.

use std::collections::HashSet;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A deduplicated set of strings that iterates in insertion order.
///
/// Serializes as a plain JSON array in insertion order, so reports stay
/// byte-for-byte reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct OrderedSet {
    items: Vec<String>,
    index: HashSet<String>,
}

impl OrderedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` if absent. Returns `true` when the set changed.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.index.contains(&name) {
            return false;
        }
        self.index.insert(name.clone());
        self.items.push(name);
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Insert every element of `other`, preserving first-occurrence order.
    pub fn extend_from(&mut self, other: &OrderedSet) {
        for name in other.iter() {
            self.insert(name.clone());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Consume the set, keeping only the ordered sequence.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl PartialEq for OrderedSet {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for OrderedSet {}

impl FromIterator<String> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<'a> FromIterator<&'a str> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl Serialize for OrderedSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl<'de> Deserialize<'de> for OrderedSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<String>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
