//! Predicate sorting and reference-order re-sequencing.
//!
//! # Examples
//!
//! ```rust
//! use slicekit::ordering::{order_by_reference, sort};
//!
//! let mut scores = [3, 9, 1];
//! assert_eq!(sort(&mut scores, false), &[9, 3, 1]);
//!
//! let rows = [(1, "a"), (3, "b"), (1, "c"), (4, "d")];
//! let ordered = order_by_reference(&[2, 1, 3], &rows, |row| row.0);
//! assert_eq!(ordered, vec![(1, "a"), (1, "c"), (3, "b"), (4, "d")]);
//! ```

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::hash::{KeyMap, key_map};
use crate::key::Key;

/// Inline capacity of the per-key position lists built by
/// [`order_owned`].
const GROUP_INLINE_CAPACITY: usize = 4;

// =============================================================================
// Sorting
// =============================================================================

/// Sorts `elements` in place using a "less than" predicate.
///
/// This is a comparison sort built on [`slice::sort_by`], which is stable:
/// elements for which neither `less(a, b)` nor `less(b, a)` holds keep their
/// relative order.
///
/// # Examples
///
/// ```rust
/// use slicekit::ordering::sort_by_less;
///
/// let mut words = ["pear", "fig", "apple"];
/// sort_by_less(&mut words, |a, b| a.len() < b.len());
/// assert_eq!(words, ["fig", "pear", "apple"]);
/// ```
pub fn sort_by_less<T, F>(elements: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    elements.sort_by(|a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}

/// Sorts naturally ordered elements ascending or descending and returns the
/// slice for chaining.
///
/// Values that are not comparable with each other (such as `NaN`) are
/// treated as equal.
pub fn sort<T: PartialOrd>(elements: &mut [T], ascending: bool) -> &mut [T] {
    if ascending {
        sort_by_less(elements, |a, b| a < b);
    } else {
        sort_by_less(elements, |a, b| a > b);
    }
    elements
}

/// Returns the first smallest element, or `None` for an empty slice.
#[must_use]
pub fn min_of<T: PartialOrd + Clone>(elements: &[T]) -> Option<T> {
    let (first, rest) = elements.split_first()?;
    let minimum = rest
        .iter()
        .fold(first, |current, candidate| if candidate < current { candidate } else { current });
    Some(minimum.clone())
}

/// Returns the first largest element, or `None` for an empty slice.
#[must_use]
pub fn max_of<T: PartialOrd + Clone>(elements: &[T]) -> Option<T> {
    let (first, rest) = elements.split_first()?;
    let maximum = rest
        .iter()
        .fold(first, |current, candidate| if candidate > current { candidate } else { current });
    Some(maximum.clone())
}

// =============================================================================
// Re-sequencing
// =============================================================================

/// Reorders `items` so that their keys follow the order of `reference`.
///
/// Items are grouped by key, keeping input order inside each group. Groups
/// are emitted in the order their key first appears in `reference`; groups
/// whose key is missing from `reference` follow, in the order their key
/// first appears in `items`. A key repeated in `reference` emits its group
/// once. If either slice is empty, `items` is returned unchanged.
///
/// # Arguments
///
/// * `reference` - The key order to follow
/// * `items` - The elements to reorder
/// * `key` - Derives the key of an item
///
/// # Complexity
///
/// O(n + r) expected
#[must_use]
pub fn order_by_reference<K, T, F>(reference: &[K], items: &[T], key: F) -> Vec<T>
where
    K: Key,
    T: Clone,
    F: Fn(&T) -> K,
{
    order_owned(reference, items.to_vec(), key)
}

/// [`order_by_reference`] applied to the caller's vector.
///
/// Elements are moved, not cloned. Returns the reordered slice for chaining.
pub fn order_in_place<'a, K, T, F>(reference: &[K], items: &'a mut Vec<T>, key: F) -> &'a mut [T]
where
    K: Key,
    F: Fn(&T) -> K,
{
    let taken = std::mem::take(items);
    *items = order_owned(reference, taken, key);
    items.as_mut_slice()
}

fn order_owned<K, T, F>(reference: &[K], items: Vec<T>, key: F) -> Vec<T>
where
    K: Key,
    F: Fn(&T) -> K,
{
    if reference.is_empty() || items.is_empty() {
        return items;
    }

    // group index per key, groups in first-appearance order
    let mut group_of: KeyMap<K, usize> = key_map(items.len());
    let mut groups: Vec<SmallVec<[usize; GROUP_INLINE_CAPACITY]>> = Vec::new();
    for (position, item) in items.iter().enumerate() {
        let next_group = groups.len();
        let group = *group_of.entry(key(item)).or_insert(next_group);
        if group == next_group {
            groups.push(SmallVec::new());
        }
        groups[group].push(position);
    }

    let mut emission: Vec<usize> = Vec::with_capacity(groups.len());
    let mut emitted = vec![false; groups.len()];
    for reference_key in reference {
        if let Some(&group) = group_of.get(reference_key) {
            if !emitted[group] {
                emitted[group] = true;
                emission.push(group);
            }
        }
    }
    emission.extend((0..groups.len()).filter(|&group| !emitted[group]));

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut result = Vec::with_capacity(slots.len());
    for group in emission {
        for &position in &groups[group] {
            if let Some(item) = slots[position].take() {
                result.push(item);
            }
        }
    }
    result
}
