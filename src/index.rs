//! Index lookup, deletion by position or value, and checked access.
//!
//! Deletion accepts negative positions, which count from the end of the
//! slice (`-1` is the last element). Positions that do not exist are
//! ignored. Checked access is the exception: [`element_at`] reports a
//! missing position as an [`OutOfRangeError`].

use crate::error::OutOfRangeError;
use crate::hash::{KeyMap, KeySet, key_map};
use crate::key::Key;

/// Returns the position of the first element whose key equals the key of
/// `element`.
#[must_use]
pub fn index_of_by<T, K, F>(element: &T, elements: &[T], key: F) -> Option<usize>
where
    K: Key,
    F: Fn(&T) -> K,
{
    let probe = key(element);
    elements.iter().position(|candidate| key(candidate) == probe)
}

/// Returns the position of the first element equal to `element`.
#[must_use]
pub fn index_of<T: PartialEq>(element: &T, elements: &[T]) -> Option<usize> {
    elements.iter().position(|candidate| candidate == element)
}

/// Returns a copy of `elements` without the given positions.
///
/// # Examples
///
/// ```rust
/// use slicekit::index::delete;
///
/// assert_eq!(delete(&[1, 2, 3, 4], &[-1]), vec![1, 2, 3]);
/// assert_eq!(delete(&[1, 2, 3, 4], &[0, 2, 9]), vec![2, 4]);
/// ```
#[must_use]
pub fn delete<T: Clone>(elements: &[T], indices: &[isize]) -> Vec<T> {
    let mut result = elements.to_vec();
    delete_at(&mut result, indices);
    result
}

/// Removes the given positions from `elements` in place.
///
/// Returns the remaining elements for chaining.
pub fn delete_at<'a, T>(elements: &'a mut Vec<T>, indices: &[isize]) -> &'a mut [T] {
    match indices {
        [] => {}
        [index] => {
            if let Some(position) = resolve(*index, elements.len()) {
                elements.remove(position);
            }
        }
        _ => {
            let length = elements.len();
            let doomed: KeySet<usize> = indices
                .iter()
                .filter_map(|&index| resolve(index, length))
                .collect();
            let mut position = 0;
            elements.retain(|_| {
                let keep = !doomed.contains(&position);
                position += 1;
                keep
            });
        }
    }
    elements.as_mut_slice()
}

/// Returns a copy of `elements` with one occurrence removed per entry of
/// `targets`.
///
/// Earlier occurrences are removed first, so `[1, 2, 1, 3]` minus `[1]` is
/// `[2, 1, 3]`.
#[must_use]
pub fn delete_elems<T: Key + Clone>(elements: &[T], targets: &[T]) -> Vec<T> {
    if targets.is_empty() {
        return elements.to_vec();
    }
    let mut pending: KeyMap<&T, usize> = key_map(targets.len());
    for target in targets {
        *pending.entry(target).or_insert(0) += 1;
    }
    let mut result = Vec::with_capacity(elements.len());
    for element in elements {
        match pending.get_mut(element) {
            Some(count) if *count > 0 => *count -= 1,
            _ => result.push(element.clone()),
        }
    }
    result
}

/// Returns the element at `index`, failing when the position does not
/// exist.
///
/// Negative indices are out of range here; they do not count from the end.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] carrying `index` and a copy of `array` when
/// `index < 0` or `index >= array.len()`.
///
/// # Examples
///
/// ```rust
/// use slicekit::index::element_at;
///
/// assert_eq!(element_at(&[1, 2, 3], 1), Ok(2));
///
/// let error = element_at(&[1, 2, 3], 5).unwrap_err();
/// assert_eq!(error.index, 5);
/// assert_eq!(error.array, vec![1, 2, 3]);
/// ```
pub fn element_at<T: Clone>(array: &[T], index: isize) -> Result<T, OutOfRangeError<T>> {
    usize::try_from(index)
        .ok()
        .and_then(|position| array.get(position))
        .cloned()
        .ok_or_else(|| {
            tracing::debug!(index, len = array.len(), "element_at: index out of range");
            OutOfRangeError {
                index,
                array: array.to_vec(),
            }
        })
}

/// Maps a possibly negative index onto a position within `length`.
fn resolve(index: isize, length: usize) -> Option<usize> {
    let position = if index < 0 {
        length.checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };
    (position < length).then_some(position)
}
