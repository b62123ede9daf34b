//! Hash maps and sets used as key lookup structures.
//!
//! The hasher behind [`KeyMap`] and [`KeySet`] is chosen at compile time:
//!
//! | Features enabled     | Hasher                        |
//! |----------------------|-------------------------------|
//! | `fxhash`             | `rustc_hash::FxBuildHasher`   |
//! | `ahash`              | `ahash::RandomState`          |
//! | neither              | `std` `RandomState` (SipHash) |
//!
//! When both `fxhash` and `ahash` are enabled, `fxhash` wins.
//!
//! Iteration order of these maps is never used to order the output of a
//! helper; order-preserving helpers keep an explicit auxiliary list.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "fxhash")]
/// Builder for the hasher used by [`KeyMap`] and [`KeySet`].
pub type KeyBuildHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// Builder for the hasher used by [`KeyMap`] and [`KeySet`].
pub type KeyBuildHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// Builder for the hasher used by [`KeyMap`] and [`KeySet`].
pub type KeyBuildHasher = std::collections::hash_map::RandomState;

/// Hash map keyed by element keys.
pub type KeyMap<K, V> = HashMap<K, V, KeyBuildHasher>;

/// Hash set of element keys.
pub type KeySet<K> = HashSet<K, KeyBuildHasher>;

/// Creates an empty [`KeyMap`] able to hold `capacity` entries without
/// reallocating.
#[inline]
pub(crate) fn key_map<K, V>(capacity: usize) -> KeyMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, KeyBuildHasher::default())
}

/// Creates an empty [`KeySet`] able to hold `capacity` keys without
/// reallocating.
#[inline]
pub(crate) fn key_set<K>(capacity: usize) -> KeySet<K> {
    HashSet::with_capacity_and_hasher(capacity, KeyBuildHasher::default())
}
