//! Overlaying the non-default fields of one value onto another.
//!
//! [`Overlay`] merges a partially filled "patch" value into an existing
//! value: every field of the source that holds something other than its
//! default value replaces the destination field, and default-valued source
//! fields leave the destination untouched.
//!
//! The trait is normally derived. `#[derive(Overlay)]` (feature `derive`)
//! generates a field-by-field implementation:
//!
//! | Field                         | Behavior                                   |
//! |-------------------------------|--------------------------------------------|
//! | plain field                   | [`overlay_field`]: replaced unless default |
//! | `Vec<_>` field                | replaced wholesale                         |
//! | `#[overlay(each)]` `Vec<T>`   | [`overlay_each`]: merged position-wise     |
//! | `#[overlay(skip)]`            | left untouched                             |
//!
//! # Examples
//!
//! ```rust
//! use slicekit::Overlay;
//!
//! #[derive(Clone, Debug, Default, PartialEq, Overlay)]
//! struct Profile {
//!     name: String,
//!     age: u32,
//!     nickname: Option<String>,
//! }
//!
//! let mut stored = Profile { name: "Ann".into(), age: 30, nickname: None };
//! let patch = Profile { name: String::new(), age: 31, nickname: Some("annie".into()) };
//!
//! stored.overlay(&patch);
//!
//! assert_eq!(stored, Profile { name: "Ann".into(), age: 31, nickname: Some("annie".into()) });
//! ```

#[cfg(feature = "derive")]
pub use slicekit_derive::Overlay;

/// A value that can absorb the non-default parts of another value of the
/// same type.
pub trait Overlay {
    /// Copies the non-default parts of `source` onto `self`.
    fn overlay(&mut self, source: &Self);
}

/// Replaces `destination` with `source` unless `source` equals the default
/// value of its type.
#[inline]
pub fn overlay_field<T>(destination: &mut T, source: &T)
where
    T: Clone + Default + PartialEq,
{
    if *source != T::default() {
        destination.clone_from(source);
    }
}

/// Overlays `source` onto `destination` position by position.
///
/// Afterwards `destination` has the length of `source`. Each position that
/// existed in `destination` is overlaid with the source element at the same
/// position; positions beyond the old length take a copy of the source
/// element; positions beyond the length of `source` are dropped.
pub fn overlay_each<T>(destination: &mut Vec<T>, source: &[T])
where
    T: Overlay + Clone,
{
    destination.truncate(source.len());
    for (existing, incoming) in destination.iter_mut().zip(source) {
        existing.overlay(incoming);
    }
    let merged = destination.len();
    destination.extend_from_slice(&source[merged..]);
}

/// Replaces `destination` when a replacement is supplied.
#[inline]
pub fn replace_if_some<T: Clone>(destination: &mut T, replacement: Option<&T>) {
    if let Some(value) = replacement {
        destination.clone_from(value);
    }
}

impl<T: Overlay> Overlay for Option<T>
where
    T: Clone,
{
    fn overlay(&mut self, source: &Self) {
        match (self.as_mut(), source) {
            (Some(existing), Some(incoming)) => existing.overlay(incoming),
            (None, Some(incoming)) => *self = Some(incoming.clone()),
            (_, None) => {}
        }
    }
}

impl<T: Overlay + ?Sized> Overlay for Box<T> {
    fn overlay(&mut self, source: &Self) {
        (**self).overlay(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Setting {
        name: String,
        level: u8,
    }

    impl Overlay for Setting {
        fn overlay(&mut self, source: &Self) {
            overlay_field(&mut self.name, &source.name);
            overlay_field(&mut self.level, &source.level);
        }
    }

    fn setting(name: &str, level: u8) -> Setting {
        Setting {
            name: name.to_string(),
            level,
        }
    }

    #[rstest]
    #[case::non_default_replaces(5, 9, 9)]
    #[case::default_keeps(5, 0, 5)]
    fn test_overlay_field(#[case] destination: i32, #[case] source: i32, #[case] expected: i32) {
        let mut value = destination;
        overlay_field(&mut value, &source);
        assert_eq!(value, expected);
    }

    #[rstest]
    fn test_overlay_each_merges_by_position() {
        let mut stored = vec![setting("a", 1), setting("b", 2)];
        overlay_each(&mut stored, &[setting("", 7), setting("bee", 0)]);
        assert_eq!(stored, vec![setting("a", 7), setting("bee", 2)]);
    }

    #[rstest]
    fn test_overlay_each_extends_with_new_elements() {
        let mut stored = vec![setting("a", 1)];
        overlay_each(&mut stored, &[setting("", 3), setting("new", 4)]);
        assert_eq!(stored, vec![setting("a", 3), setting("new", 4)]);
    }

    #[rstest]
    fn test_overlay_each_truncates_to_source_length() {
        let mut stored = vec![setting("a", 1), setting("b", 2)];
        overlay_each(&mut stored, &[setting("", 0)]);
        assert_eq!(stored, vec![setting("a", 1)]);
    }

    #[rstest]
    fn test_replace_if_some() {
        let mut value = 1;
        replace_if_some(&mut value, None);
        assert_eq!(value, 1);
        replace_if_some(&mut value, Some(&4));
        assert_eq!(value, 4);
    }

    #[rstest]
    fn test_option_overlay() {
        let mut stored = Some(setting("a", 1));
        stored.overlay(&Some(setting("", 2)));
        assert_eq!(stored, Some(setting("a", 2)));

        stored.overlay(&None);
        assert_eq!(stored, Some(setting("a", 2)));

        let mut empty: Option<Setting> = None;
        empty.overlay(&Some(setting("x", 0)));
        assert_eq!(empty, Some(setting("x", 0)));
    }
}
