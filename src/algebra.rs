//! Key-driven set algebra over slices.
//!
//! This module provides difference, intersection, multi-way intersection,
//! symmetric difference, containment and duplicate detection. Elements are
//! compared through their keys only; see [`crate::key`].
//!
//! # Policies
//!
//! - Results that keep elements of an input slice keep them in that slice's
//!   order, first occurrence per key.
//! - [`difference_by`] returns its left input unchanged (no deduplication)
//!   when the right input is empty.
//! - [`intersection_all_by`] and [`symmetric_difference`] make no promise
//!   about output order.
//!
//! # Examples
//!
//! ```rust
//! use slicekit::algebra::{difference_by, intersection_all, symmetric_difference};
//!
//! #[derive(Clone)]
//! struct User { id: u32 }
//! struct Grant { user_id: u32 }
//!
//! let users = [User { id: 1 }, User { id: 2 }, User { id: 3 }];
//! let grants = [Grant { user_id: 2 }];
//!
//! let ungranted = difference_by(&users, &grants, |user| user.id, |grant| grant.user_id);
//! # let ungranted: Vec<u32> = ungranted.iter().map(|user| user.id).collect();
//! assert_eq!(ungranted, vec![1, 3]);
//!
//! let common = intersection_all(&[vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
//! assert_eq!(common, vec![3]);
//!
//! let mut only_one_side = symmetric_difference(&[1, 2, 3], &[2, 3, 4]);
//! only_one_side.sort_unstable();
//! assert_eq!(only_one_side, vec![1, 4]);
//! ```

use crate::distinct::distinct;
use crate::hash::{KeyMap, KeySet, key_map, key_set};
use crate::key::{Key, identity};

// =============================================================================
// Difference
// =============================================================================

/// Returns the elements of `a` whose key does not occur in `b` (a - b).
///
/// The result is deduplicated by key and keeps `a`'s order. When `b` is
/// empty, `a` is returned as is, without deduplication.
///
/// # Arguments
///
/// * `a` - The slice to subtract from
/// * `b` - The slice to subtract
/// * `key_a` - Derives the key of an element of `a`
/// * `key_b` - Derives the key of an element of `b`
///
/// # Complexity
///
/// O(n + m) expected
#[must_use]
pub fn difference_by<T, V, K, FA, FB>(a: &[T], b: &[V], key_a: FA, key_b: FB) -> Vec<T>
where
    T: Clone,
    K: Key,
    FA: Fn(&T) -> K,
    FB: Fn(&V) -> K,
{
    if b.is_empty() {
        tracing::trace!(len = a.len(), "difference: empty subtrahend, returning input");
        return a.to_vec();
    }
    let excluded: KeySet<K> = b.iter().map(key_b).collect();
    let mut seen = key_set(a.len());
    let mut result = Vec::with_capacity(a.len());
    for element in a {
        let element_key = key_a(element);
        if excluded.contains(&element_key) || seen.contains(&element_key) {
            continue;
        }
        seen.insert(element_key);
        result.push(element.clone());
    }
    result
}

/// [`difference_by`] with one key function for both slices.
#[must_use]
pub fn difference_by_key<T, K, F>(a: &[T], b: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Key,
    F: Fn(&T) -> K,
{
    difference_by(a, b, &key, &key)
}

/// [`difference_by`] keyed by the elements themselves.
///
/// # Examples
///
/// ```rust
/// use slicekit::algebra::difference;
///
/// assert_eq!(difference(&[1, 2, 2, 3], &[3]), vec![1, 2]);
/// // an empty right side skips deduplication
/// assert_eq!(difference(&[1, 2, 2, 3], &[]), vec![1, 2, 2, 3]);
/// ```
#[must_use]
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Key + Clone,
{
    difference_by(a, b, identity, identity)
}

/// Converts every element of `b` into `a`'s element type, then returns
/// [`difference`] of `a` and the converted slice.
#[must_use]
pub fn difference_mapped<T, V, F>(a: &[T], b: &[V], convert: F) -> Vec<T>
where
    T: Key + Clone,
    F: Fn(&V) -> T,
{
    let converted: Vec<T> = b.iter().map(convert).collect();
    difference(a, &converted)
}

/// Compares the elements of `a` against `b` after converting them into
/// `b`'s element type.
#[must_use]
pub fn difference_converted<T, E, F>(a: &[T], b: &[E], convert: F) -> Vec<T>
where
    T: Clone,
    E: Key + Clone,
    F: Fn(&T) -> E,
{
    difference_by(a, b, convert, identity)
}

/// Returns the elements of `a` whose key does not occur in `b`, keeping
/// duplicates within `a`.
///
/// # Examples
///
/// ```rust
/// use slicekit::algebra::difference_keep_duplicates;
///
/// assert_eq!(difference_keep_duplicates(&[1, 1, 2], &[2], |value| *value), vec![1, 1]);
/// ```
#[must_use]
pub fn difference_keep_duplicates<T, K, F>(a: &[T], b: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Key,
    F: Fn(&T) -> K,
{
    let excluded: KeySet<K> = b.iter().map(&key).collect();
    a.iter()
        .filter(|element| !excluded.contains(&key(*element)))
        .cloned()
        .collect()
}

// =============================================================================
// Intersection
// =============================================================================

/// Returns the elements of `a` whose key also occurs in `b` (a ∩ b).
///
/// The result is deduplicated by key and keeps `a`'s order. An empty `b`
/// yields an empty result.
///
/// # Complexity
///
/// O(n + m) expected
#[must_use]
pub fn intersection_by<T, V, K, FA, FB>(a: &[T], b: &[V], key_a: FA, key_b: FB) -> Vec<T>
where
    T: Clone,
    K: Key,
    FA: Fn(&T) -> K,
    FB: Fn(&V) -> K,
{
    if b.is_empty() {
        return Vec::new();
    }
    let included: KeySet<K> = b.iter().map(key_b).collect();
    let mut seen = key_set(a.len().min(included.len()));
    let mut result = Vec::with_capacity(a.len().min(included.len()));
    for element in a {
        let element_key = key_a(element);
        if included.contains(&element_key) && !seen.contains(&element_key) {
            seen.insert(element_key);
            result.push(element.clone());
        }
    }
    result
}

/// [`intersection_by`] with one key function for both slices.
#[must_use]
pub fn intersection_by_key<T, K, F>(a: &[T], b: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Key,
    F: Fn(&T) -> K,
{
    intersection_by(a, b, &key, &key)
}

/// [`intersection_by`] keyed by the elements themselves.
#[must_use]
pub fn intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Key + Clone,
{
    intersection_by(a, b, identity, identity)
}

/// Returns the elements whose key occurs in every one of `sets`.
///
/// No input sets, or any empty set, yields an empty result. One element is
/// reported per common key.
///
/// The output order is unspecified and callers must not depend on it. The
/// current implementation walks the set with the fewest distinct keys (the
/// first such set on ties), reports keys in that set's first-occurrence
/// order, and reports the last element that set holds for each key.
#[must_use]
pub fn intersection_all_by<T, S, K, F>(sets: &[S], key: F) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    K: Key,
    F: Fn(&T) -> K,
{
    if sets.is_empty() {
        return Vec::new();
    }

    let mut indexes: Vec<IndexedSet<K>> = Vec::with_capacity(sets.len());
    for set in sets {
        let elements = set.as_ref();
        if elements.is_empty() {
            tracing::trace!(sets = sets.len(), "intersection_all: empty input set");
            return Vec::new();
        }
        indexes.push(IndexedSet::build(elements, &key));
    }

    let driver = indexes
        .iter()
        .enumerate()
        .min_by_key(|(_, index)| index.positions.len())
        .map_or(0, |(position, _)| position);

    let driver_elements = sets[driver].as_ref();
    let driver_index = &indexes[driver];
    let mut result = Vec::with_capacity(driver_index.positions.len());
    for &first in &driver_index.first_seen {
        let element_key = key(&driver_elements[first]);
        let in_every_set = indexes
            .iter()
            .enumerate()
            .all(|(position, index)| position == driver || index.positions.contains_key(&element_key));
        if in_every_set {
            if let Some(&last) = driver_index.positions.get(&element_key) {
                result.push(driver_elements[last].clone());
            }
        }
    }
    result
}

/// [`intersection_all_by`] keyed by the elements themselves.
#[must_use]
pub fn intersection_all<T, S>(sets: &[S]) -> Vec<T>
where
    T: Key + Clone,
    S: AsRef<[T]>,
{
    intersection_all_by(sets, identity)
}

/// Key index of one input set of [`intersection_all_by`].
struct IndexedSet<K> {
    /// Last position of every key (last write wins).
    positions: KeyMap<K, usize>,
    /// First position of every key, in input order.
    first_seen: Vec<usize>,
}

impl<K: Key> IndexedSet<K> {
    fn build<T, F>(elements: &[T], key: &F) -> Self
    where
        F: Fn(&T) -> K,
    {
        let mut positions = key_map(elements.len());
        let mut first_seen = Vec::with_capacity(elements.len());
        for (position, element) in elements.iter().enumerate() {
            if positions.insert(key(element), position).is_none() {
                first_seen.push(position);
            }
        }
        Self {
            positions,
            first_seen,
        }
    }
}

// =============================================================================
// Symmetric Difference
// =============================================================================

/// Returns the values that occur in exactly one of `a` and `b`.
///
/// Both inputs are deduplicated first, so repeated values within one slice
/// never count twice.
///
/// The output order is unspecified and callers must not depend on it. The
/// current implementation reports the values found only in `a` in `a`'s
/// order, followed by the values found only in `b` in `b`'s order.
#[must_use]
pub fn symmetric_difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Key + Clone,
{
    let distinct_a = distinct(a);
    let distinct_b = distinct(b);
    let mut counts: KeyMap<&T, u8> = key_map(distinct_a.len() + distinct_b.len());
    for value in distinct_a.iter().chain(&distinct_b) {
        *counts.entry(value).or_insert(0) += 1;
    }
    distinct_a
        .iter()
        .chain(&distinct_b)
        .filter(|value| counts.get(value) == Some(&1))
        .cloned()
        .collect()
}

/// Returns `true` if `a` and `b` hold the same values, ignoring order and
/// duplicates.
///
/// # Examples
///
/// ```rust
/// use slicekit::algebra::is_complete;
///
/// assert!(is_complete(&[1, 2, 2, 3], &[3, 1, 2]));
/// assert!(!is_complete(&[1, 2], &[1, 2, 3]));
/// ```
#[must_use]
pub fn is_complete<T>(a: &[T], b: &[T]) -> bool
where
    T: Key + Clone,
{
    symmetric_difference(a, b).is_empty()
}

/// Returns `true` if the distinct values of `keys` are exactly the keys of
/// `elements`.
///
/// Two empty inputs are complete.
#[must_use]
pub fn is_complete_by<K, T, F>(keys: &[K], elements: &[T], key: F) -> bool
where
    K: Key,
    F: Fn(&T) -> K,
{
    let expected: KeySet<&K> = keys.iter().collect();
    let actual: KeySet<K> = elements.iter().map(key).collect();
    expected.len() == actual.len() && actual.iter().all(|element_key| expected.contains(element_key))
}

// =============================================================================
// Containment
// =============================================================================

/// Returns `true` if `element` occurs in `elements`.
#[must_use]
pub fn contains<T: PartialEq>(elements: &[T], element: &T) -> bool {
    elements.iter().any(|candidate| candidate == element)
}

/// Returns `true` if any of `queries` occurs in `target`.
///
/// This is "any match" semantics: one hit is enough. An empty `queries`
/// slice is never contained.
///
/// # Examples
///
/// ```rust
/// use slicekit::algebra::contains_any;
///
/// assert!(contains_any(&[1, 2, 3], &[9, 3]));
/// assert!(!contains_any(&[1, 2, 3], &[9, 8]));
/// ```
#[must_use]
pub fn contains_any<T: Key>(target: &[T], queries: &[T]) -> bool {
    let members: KeySet<&T> = target.iter().collect();
    queries.iter().any(|query| members.contains(query))
}

/// Returns `true` as soon as two elements share a key.
#[must_use]
pub fn has_duplicates_by<T, K, F>(elements: &[T], key: F) -> bool
where
    K: Key,
    F: Fn(&T) -> K,
{
    let mut seen = key_set(elements.len());
    elements.iter().any(|element| !seen.insert(key(element)))
}

/// [`has_duplicates_by`] keyed by the elements themselves.
#[must_use]
pub fn has_duplicates<T: Key>(elements: &[T]) -> bool {
    let mut seen: KeySet<&T> = key_set(elements.len());
    elements.iter().any(|element| !seen.insert(element))
}
