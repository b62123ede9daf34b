//! # slicekit
//!
//! Key-driven helpers for working with slices: set algebra, deduplication,
//! re-sequencing, pagination, map conversion and struct overlay merging.
//!
//! ## Overview
//!
//! Every helper is a short, stateless transformation over borrowed slices.
//! Equality is never taken from the element type itself. Instead, callers
//! pass a key function that projects each element onto a comparable key, so
//! two slices of different element types can be combined as long as they
//! share a key domain.
//!
//! - **Set Algebra**: difference, intersection, multi-way intersection,
//!   symmetric difference, containment and duplicate checks
//! - **Deduplication**: first-occurrence-wins `distinct` family
//! - **Transformation**: map, filter, slice-to-map and slice-to-set builders
//! - **Ordering**: predicate sort and reference-order re-sequencing
//! - **Pagination**: 1-based page windows over a slice
//! - **Indexing**: lookup, deletion and checked element access
//! - **Overlay**: merge non-default fields of one value over another
//!
//! ## Feature Flags
//!
//! - `algebra`: Set algebra (enables `distinct`)
//! - `distinct`: Deduplication
//! - `transform`: Map and filter conversions
//! - `ordering`: Sorting and re-sequencing
//! - `paginate`: Page windows
//! - `index`: Index lookup and deletion
//! - `overlay`: The [`Overlay`](overlay::Overlay) trait
//! - `derive`: `#[derive(Overlay)]`
//! - `serde`: Serde support for descriptors and `unique_join`
//! - `fxhash` / `ahash`: Faster hashers for the internal key maps
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use slicekit::prelude::*;
//!
//! let current = [1, 2, 3, 3, 4];
//! let removed = [2, 4];
//!
//! assert_eq!(difference(&current, &removed), vec![1, 3]);
//! assert_eq!(intersection(&current, &removed), vec![2, 4]);
//! assert_eq!(paginate(&current, 2, 2), &[3, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled helper together with the key and error types.
///
/// # Usage
///
/// ```rust
/// use slicekit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::hash::{KeyBuildHasher, KeyMap, KeySet};
    pub use crate::key::*;

    #[cfg(feature = "algebra")]
    pub use crate::algebra::*;

    #[cfg(feature = "distinct")]
    pub use crate::distinct::*;

    #[cfg(feature = "transform")]
    pub use crate::transform::*;

    #[cfg(feature = "ordering")]
    pub use crate::ordering::*;

    #[cfg(feature = "paginate")]
    pub use crate::paginate::*;

    #[cfg(feature = "index")]
    pub use crate::index::*;

    #[cfg(feature = "overlay")]
    pub use crate::overlay::*;
}

pub mod error;
pub mod hash;
pub mod key;

#[cfg(feature = "algebra")]
pub mod algebra;

#[cfg(feature = "distinct")]
pub mod distinct;

#[cfg(feature = "transform")]
pub mod transform;

#[cfg(feature = "ordering")]
pub mod ordering;

#[cfg(feature = "paginate")]
pub mod paginate;

#[cfg(feature = "index")]
pub mod index;

#[cfg(feature = "overlay")]
pub mod overlay;

#[cfg(feature = "overlay")]
pub use crate::overlay::Overlay;
