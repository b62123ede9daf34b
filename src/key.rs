//! The key-function abstraction shared by every keyed helper.
//!
//! Keyed helpers never compare elements directly. Each one takes a key
//! function `Fn(&T) -> K` per input slice and compares the derived keys, so
//! an element type only needs to be cloneable while the key carries the
//! equality and hashing requirements.
//!
//! # Examples
//!
//! ```rust
//! use slicekit::key::{Key, identity};
//!
//! fn takes_key<K: Key>(_: K) {}
//!
//! takes_key(identity(&"user-42"));
//! takes_key((1_u8, String::from("composite")));
//! ```

use std::hash::Hash;

/// A value that can act as the comparison key of an element.
///
/// This is a marker trait with a blanket implementation: every `Eq + Hash`
/// type is a key.
pub trait Key: Eq + Hash {}

impl<K: Eq + Hash + ?Sized> Key for K {}

/// Key function that uses the element itself as its key.
///
/// Used by the identity-keyed variants such as `difference` and `distinct`.
#[inline]
pub fn identity<T: Clone>(element: &T) -> T {
    element.clone()
}
