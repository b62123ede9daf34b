//! First-occurrence-wins deduplication.
//!
//! Every function in this module keeps the first element seen for each key
//! and drops later duplicates, preserving the relative order of the kept
//! elements.
//!
//! # Examples
//!
//! ```rust
//! use slicekit::distinct::{distinct, distinct_by, distinct_keys_by};
//!
//! assert_eq!(distinct(&[5, 3, 5, 7]), vec![5, 3, 7]);
//!
//! let users = [("ann", 1), ("bob", 2), ("ann", 3)];
//! assert_eq!(distinct_by(&users, |user| user.0), vec![("ann", 1), ("bob", 2)]);
//! assert_eq!(distinct_keys_by(&users, |user| user.0), vec!["ann", "bob"]);
//! ```

use crate::hash::key_set;
use crate::key::{Key, identity};

/// Removes elements whose key was already seen earlier in the slice.
///
/// # Arguments
///
/// * `elements` - The input slice
/// * `key` - Derives the comparison key of an element
///
/// # Complexity
///
/// O(n) expected
#[must_use]
pub fn distinct_by<T, K, F>(elements: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Key,
    F: Fn(&T) -> K,
{
    let mut seen = key_set(elements.len());
    let mut result = Vec::with_capacity(elements.len());
    for element in elements {
        if seen.insert(key(element)) {
            result.push(element.clone());
        }
    }
    result
}

/// Returns the distinct keys of a slice in first-occurrence order.
///
/// Same walk as [`distinct_by`], but the keys are collected instead of the
/// elements.
#[must_use]
pub fn distinct_keys_by<T, K, F>(elements: &[T], key: F) -> Vec<K>
where
    K: Key + Clone,
    F: Fn(&T) -> K,
{
    let mut seen = key_set(elements.len());
    let mut result = Vec::with_capacity(elements.len());
    for element in elements {
        let element_key = key(element);
        if !seen.contains(&element_key) {
            seen.insert(element_key.clone());
            result.push(element_key);
        }
    }
    result
}

/// Removes repeated elements, keeping the first occurrence of each.
///
/// Slices of fewer than three elements are handled without building a
/// lookup set; the result is the same as for the general path.
#[must_use]
pub fn distinct<T>(elements: &[T]) -> Vec<T>
where
    T: Key + Clone,
{
    match elements {
        [] | [_] => elements.to_vec(),
        [first, second] if first == second => vec![first.clone()],
        [_, _] => elements.to_vec(),
        _ => distinct_by(elements, identity),
    }
}
