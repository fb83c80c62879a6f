//! The `Configuration` accessor.
//!
//! A read-only, case-insensitive map from keys to values plus a
//! [`DefaultPolicy`] consulted for absent keys.

use std::collections::HashMap;
use std::collections::hash_map;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::error::LookupError;
use super::policy::DefaultPolicy;
use crate::constants::RESERVED_NAMES;

/// Immutable snapshot of configuration values.
///
/// Keys are lower-cased when the snapshot is built and every lookup
/// lower-cases the requested key, so `get("ForwardX11")` and
/// `get("forwardx11")` see the same entry. Values keep their case.
///
/// There is no way to mutate a `Configuration` after construction; build a
/// new one for a new snapshot. Loaders live in [`crate::loader`] and return
/// `Configuration<String>`.
#[derive(Debug, Clone)]
pub struct Configuration<V = String> {
    entries: HashMap<String, V>,
    default: DefaultPolicy<V>,
}

impl<V> Configuration<V> {
    /// Build a snapshot from key/value pairs and a default policy.
    ///
    /// When two keys fold to the same lower-cased form, the later pair wins.
    pub fn new<I, K>(entries: I, default: DefaultPolicy<V>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.as_ref().to_lowercase(), value))
            .collect();
        Self { entries, default }
    }

    /// Same entries, different default policy.
    pub fn with_default(self, default: DefaultPolicy<V>) -> Self {
        Self {
            entries: self.entries,
            default,
        }
    }

    /// The policy applied to absent keys.
    pub fn default_policy(&self) -> &DefaultPolicy<V> {
        &self.default
    }

    /// Every stored `(lower-cased key, value)` pair, in no particular order.
    ///
    /// No defaulting is applied; this is exactly what was loaded.
    pub fn items(&self) -> Items<'_, V> {
        Items {
            inner: self.entries.iter(),
        }
    }

    /// Alias for [`Configuration::items`].
    pub fn iter(&self) -> Items<'_, V> {
        self.items()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` (in any case) is stored.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }
}

impl<V: Clone> Configuration<V> {
    /// Resolve `key` using the instance's default policy.
    ///
    /// Present keys always resolve to `Ok(Some(value))`. Absent keys follow
    /// the policy; only [`DefaultPolicy::Fail`] produces an error.
    pub fn get(&self, key: &str) -> Result<Option<V>, LookupError> {
        self.get_or(key, &self.default)
    }

    /// Resolve `key`, using `default` instead of the instance policy when the
    /// key is absent.
    pub fn get_or(&self, key: &str, default: &DefaultPolicy<V>) -> Result<Option<V>, LookupError> {
        match self.entries.get(&key.to_lowercase()) {
            Some(value) => Ok(Some(value.clone())),
            None => default.resolve(key),
        }
    }

    /// Name-style access: `attr("forwardx11")` is `get("forwardx11")`.
    ///
    /// Names listed in [`RESERVED_NAMES`] belong to the accessor's own API and
    /// are never forwarded, even when a key with that name was loaded. Such
    /// keys are shadowed here and have to be read with [`Configuration::get`].
    /// The check is case-sensitive, so `attr("Items")` is a plain lookup.
    pub fn attr(&self, name: &str) -> Result<Option<V>, LookupError> {
        if RESERVED_NAMES.contains(&name) {
            return Err(LookupError::Reserved {
                name: name.to_string(),
            });
        }
        self.get(name)
    }
}

impl<V> Default for Configuration<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            default: DefaultPolicy::None,
        }
    }
}

impl<V> From<HashMap<String, V>> for Configuration<V> {
    fn from(entries: HashMap<String, V>) -> Self {
        Self::new(entries, DefaultPolicy::None)
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for Configuration<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter, DefaultPolicy::None)
    }
}

impl<'a, V> IntoIterator for &'a Configuration<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Items<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

/// Serializes the stored entries as a map with keys in sorted order.
impl<V: Serialize> Serialize for Configuration<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        let mut map = serializer.serialize_map(Some(keys.len()))?;
        for key in keys {
            map.serialize_entry(key, &self.entries[key])?;
        }
        map.end()
    }
}

/// Iterator returned by [`Configuration::items`].
#[derive(Debug, Clone)]
pub struct Items<'a, V> {
    inner: hash_map::Iter<'a, String, V>,
}

impl<'a, V> Iterator for Items<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Items<'_, V> {}
