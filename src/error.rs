//! Error types for checked slice access.
//!
//! Almost every helper in this crate is total. Checked indexing is the one
//! exception: reading past either end of a slice fails with
//! [`OutOfRangeError`] instead of panicking or returning a default value.

/// Represents an attempt to read a slice position that does not exist.
///
/// The error carries the offending index together with a copy of the slice
/// contents so callers can report exactly what was asked for.
///
/// # Examples
///
/// ```rust
/// use slicekit::error::OutOfRangeError;
///
/// let error = OutOfRangeError {
///     index: 5,
///     array: vec![1, 2, 3],
/// };
/// assert_eq!(
///     format!("{}", error),
///     "index out of range: index 5, array [1, 2, 3]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("index out of range: index {index}, array {array:?}")]
pub struct OutOfRangeError<T> {
    /// The requested index.
    pub index: isize,
    /// The contents of the slice at the time of the access.
    pub array: Vec<T>,
}

static_assertions::assert_impl_all!(OutOfRangeError<i32>: std::error::Error, Send, Sync, Clone);
static_assertions::assert_impl_all!(OutOfRangeError<String>: std::error::Error, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_out_of_range_error_display() {
        let error = OutOfRangeError {
            index: 5,
            array: vec![1, 2, 3],
        };
        assert_eq!(
            format!("{error}"),
            "index out of range: index 5, array [1, 2, 3]"
        );
    }

    #[rstest]
    fn test_out_of_range_error_display_negative_index() {
        let error = OutOfRangeError {
            index: -1,
            array: vec!["a".to_string()],
        };
        assert_eq!(
            format!("{error}"),
            "index out of range: index -1, array [\"a\"]"
        );
    }

    #[rstest]
    fn test_out_of_range_error_equality() {
        let error1 = OutOfRangeError {
            index: 3,
            array: vec![1, 2],
        };
        let error2 = OutOfRangeError {
            index: 3,
            array: vec![1, 2],
        };
        let error3 = OutOfRangeError {
            index: 4,
            array: vec![1, 2],
        };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[rstest]
    fn test_out_of_range_error_source() {
        use std::error::Error;

        let error = OutOfRangeError {
            index: 0,
            array: Vec::<u8>::new(),
        };
        assert!(error.source().is_none());
    }
}
