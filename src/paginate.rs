//! 1-based page windows over slices.
//!
//! Page windows borrow from the input slice; nothing is copied.
//!
//! | Input                               | Result                |
//! |-------------------------------------|-----------------------|
//! | `page_number <= 0`                  | empty                 |
//! | `page_size <= 0`                    | empty                 |
//! | start at or beyond the end          | empty                 |
//! | window straddling the end           | truncated, no padding |
//!
//! # Examples
//!
//! ```rust
//! use slicekit::paginate::{PageRequest, paginate, paginate_by};
//!
//! let values: Vec<i32> = (1..=10).collect();
//! assert_eq!(paginate(&values, 2, 3), &[4, 5, 6]);
//! assert_eq!(paginate(&values, 4, 3), &[10]);
//! assert!(paginate(&values, 5, 3).is_empty());
//!
//! let request = PageRequest::new(1, 4);
//! assert_eq!(paginate_by(&values, &request), &[1, 2, 3, 4]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A page descriptor: which page to show and how many elements per page.
///
/// Implement this for request types that already carry paging fields.
pub trait Pagination {
    /// The 1-based page number.
    fn page_number(&self) -> i32;

    /// The number of elements per page.
    fn show_number(&self) -> i32;
}

/// A plain [`Pagination`] descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageRequest {
    /// The 1-based page number.
    pub page_number: i32,
    /// The number of elements per page.
    pub show_number: i32,
}

impl PageRequest {
    /// Creates a descriptor for page `page_number` of `show_number` elements.
    #[must_use]
    pub const fn new(page_number: i32, show_number: i32) -> Self {
        Self {
            page_number,
            show_number,
        }
    }
}

impl Pagination for PageRequest {
    fn page_number(&self) -> i32 {
        self.page_number
    }

    fn show_number(&self) -> i32 {
        self.show_number
    }
}

impl<P: Pagination + ?Sized> Pagination for &P {
    fn page_number(&self) -> i32 {
        (**self).page_number()
    }

    fn show_number(&self) -> i32 {
        (**self).show_number()
    }
}

/// Returns page `page_number` (1-based) of `page_size` elements.
///
/// The window starts at `(page_number - 1) * page_size` and is clamped to
/// the end of the slice. Non-positive arguments, a start past the end, and
/// windows whose bounds do not fit in `usize` all produce an empty slice.
#[must_use]
pub fn paginate<T>(elements: &[T], page_number: i64, page_size: i64) -> &[T] {
    if page_number <= 0 || page_size <= 0 {
        tracing::trace!(page_number, page_size, "paginate: non-positive page parameters");
        return &[];
    }
    let Some(start) = page_number
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
        .and_then(|start| usize::try_from(start).ok())
    else {
        return &[];
    };
    if start >= elements.len() {
        return &[];
    }
    let size = usize::try_from(page_size).unwrap_or(usize::MAX);
    let end = start.saturating_add(size).min(elements.len());
    &elements[start..end]
}

/// [`paginate`] driven by a [`Pagination`] descriptor.
#[must_use]
pub fn paginate_by<'a, T, P>(elements: &'a [T], pagination: &P) -> &'a [T]
where
    P: Pagination + ?Sized,
{
    paginate(
        elements,
        i64::from(pagination.page_number()),
        i64::from(pagination.show_number()),
    )
}
