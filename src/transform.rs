//! Element-wise transformations and slice-to-map builders.
//!
//! The map builders are last-write-wins: when two elements produce the same
//! key, the later element's entry replaces the earlier one. This is the
//! opposite of the first-wins policy of [`crate::distinct`].
//!
//! # Examples
//!
//! ```rust
//! use slicekit::transform::{filter_map, map, to_map};
//!
//! let lengths = map(&["a", "bcd"], |word| word.len());
//! assert_eq!(lengths, vec![1, 3]);
//!
//! let evens = filter_map(&[1, 2, 3, 4], |value| (value % 2 == 0).then_some(value * 10));
//! assert_eq!(evens, vec![20, 40]);
//!
//! let latest = to_map(&[(1, "old"), (2, "two"), (1, "new")], |entry| entry.0);
//! assert_eq!(latest[&1], (1, "new"));
//! ```

use std::collections::HashMap;

use crate::hash::{KeyMap, KeySet, key_map, key_set};
use crate::key::{Key, identity};

/// Transforms every element, preserving order and length.
#[must_use]
pub fn map<T, U, F>(elements: &[T], transform: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    elements.iter().map(transform).collect()
}

/// Transforms every element and drops those for which `transform` returns
/// `None`.
///
/// The kept values stay in input order.
#[must_use]
pub fn filter_map<T, U, F>(elements: &[T], transform: F) -> Vec<U>
where
    F: Fn(&T) -> Option<U>,
{
    let mut result = Vec::with_capacity(elements.len());
    result.extend(elements.iter().filter_map(transform));
    result
}

/// Builds a map from the entries `entry` produces, skipping elements for
/// which it returns `None`.
///
/// Later entries overwrite earlier ones with the same key.
#[must_use]
pub fn to_map_filtered<T, K, V, F>(elements: &[T], entry: F) -> KeyMap<K, V>
where
    K: Key,
    F: Fn(&T) -> Option<(K, V)>,
{
    let mut result = key_map(elements.len());
    for element in elements {
        if let Some((key, value)) = entry(element) {
            result.insert(key, value);
        }
    }
    result
}

/// Builds a map with one entry per element, last write wins.
#[must_use]
pub fn to_map_with<T, K, V, F>(elements: &[T], entry: F) -> KeyMap<K, V>
where
    K: Key,
    F: Fn(&T) -> (K, V),
{
    to_map_filtered(elements, |element| Some(entry(element)))
}

/// Builds a map from each element's key to the element, last write wins.
#[must_use]
pub fn to_map<T, K, F>(elements: &[T], key: F) -> KeyMap<K, T>
where
    T: Clone,
    K: Key,
    F: Fn(&T) -> K,
{
    to_map_with(elements, |element| (key(element), element.clone()))
}

/// Builds the set of keys of a slice.
#[must_use]
pub fn to_set_by<T, K, F>(elements: &[T], key: F) -> KeySet<K>
where
    K: Key,
    F: Fn(&T) -> K,
{
    let mut result = key_set(elements.len());
    result.extend(elements.iter().map(key));
    result
}

/// [`to_set_by`] keyed by the elements themselves.
#[must_use]
pub fn to_set<T: Key + Clone>(elements: &[T]) -> KeySet<T> {
    to_set_by(elements, identity)
}

/// Collects the keys of a map. The order is unspecified.
#[must_use]
pub fn keys<K: Clone, V, S>(map: &HashMap<K, V, S>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Collects the values of a map. The order is unspecified.
#[must_use]
pub fn values<K, V: Clone, S>(map: &HashMap<K, V, S>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Encodes `parts` as a JSON array string.
///
/// The encoding makes the joined value unambiguous, which plain separator
/// joining is not: `["a,b"]` and `["a","b"]` stay distinct.
///
/// # Examples
///
/// ```rust
/// use slicekit::transform::unique_join;
///
/// assert_eq!(unique_join(&["a", "b"]), r#"["a","b"]"#);
/// assert_ne!(unique_join(&["a,b"]), unique_join(&["a", "b"]));
/// ```
#[cfg(feature = "serde")]
#[must_use]
pub fn unique_join<S: AsRef<str>>(parts: &[S]) -> String {
    let parts: Vec<&str> = parts.iter().map(|part| part.as_ref()).collect();
    serde_json::to_string(&parts).unwrap_or_default()
}
