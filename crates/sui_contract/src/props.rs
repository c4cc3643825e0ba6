use std::collections::{btree_map, BTreeMap};

use serde::Serialize;

use crate::PropValue;

/// Prop-name to value mapping passed to components and carried by nodes.
///
/// Entry order carries no meaning; the map is sorted so that output is deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    /// Creates an empty props map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds props from a JSON object. Non-object values produce empty props.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => Self::from(map),
            _ => Self::new(),
        }
    }

    /// Looks up a prop entry, including explicitly undefined ones.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.0.get(name)
    }

    /// Returns `true` when an entry exists for `name`, even if it is undefined.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns `true` when `name` holds anything other than undefined.
    pub fn is_set(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(|value| !value.is_undefined())
    }

    /// Inserts or replaces an entry, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Removes an entry and returns it.
    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        self.0.remove(name)
    }

    /// Copies every entry of `other` over this map; `other` wins on conflicts.
    pub fn overlay(&mut self, other: &Props) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// Returns a new map holding `self` overlaid with `other`.
    pub fn overlaid(&self, other: &Props) -> Props {
        let mut merged = self.clone();
        merged.overlay(other);
        merged
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, PropValue> {
        self.0.iter()
    }

    /// Iterates prop names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = btree_map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = (&'a String, &'a PropValue);
    type IntoIter = btree_map::Iter<'a, String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Props {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}
